//! Formatting and parsing helpers shared across ORS search pages.
//!
//! Every helper is a free function; none of them keep state apart from
//! [`debug`], which reads the process-wide [`ors_crs::FlagLatch`].

pub mod dates;
pub mod debug;
pub mod facts;
pub mod json;
pub mod maps;
pub mod numbers;
pub mod strings;

pub use dates::{
    ElapsedLabels, OldDateMode, age_on, date, date_time, date_to_age, days_between,
    gmt_date_time, hours_between, inc_date, is_old_date, is_old_date_at, parse_date_time,
    time_elapsed, to_time,
};
pub use debug::{ppre, ppre_debug, pre, pre_debug, pre_debug_with};
pub use facts::{FactIcon, fact_icon};
pub use json::{is_json, json_decode_nice, pad_zero_array};
pub use maps::{array_only, dash_to_underscore, map_prefixed, underscore_to_dash};
pub use numbers::{
    percent_to_rating, price, price_euro, rating_color, rating_to_percent, to_float,
};
pub use strings::{
    KeywordOperator, contains_keywords, contains_keywords_str, extrim, make_unique_hash,
    remove_object_category,
};
