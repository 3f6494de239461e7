//! Icons for GIATA facility facts.

use serde::Serialize;

/// The icon shown for a facility fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactIcon {
    /// CSS icon class.
    pub icon: &'static str,
    /// Translation key of the fact's display name.
    pub name: &'static str,
}

impl FactIcon {
    const fn new(icon: &'static str, name: &'static str) -> Self {
        Self { icon, name }
    }
}

/// Returns the icon for a GIATA fact code (`air`, `wifi`, `bea`, ...).
///
/// Related codes share one icon, e.g. every sport code maps to the sport
/// icon. Unknown codes yield `None`.
pub fn fact_icon(code: &str) -> Option<FactIcon> {
    let icon = match code {
        "air" => FactIcon::new("glyphicons glyphicons-snowflake", "oam_objects.air:object"),
        "wifi" => FactIcon::new("glyphicons glyphicons-wifi", "oam_objects.wifi:object"),
        "bea" | "ben" => FactIcon::new(
            "glyphicons glyphicons-beach_umbrella",
            "oam_objects.bea:object",
        ),
        "pol" | "ipl" => FactIcon::new("glyphicons glyphicons-pool", "oam_objects.pol:object"),
        "whc" => FactIcon::new("fa fa-wheelchair", "oam_objects.whc:object"),
        "spt" | "sws" | "shb" | "sgl" | "srd" | "sae" | "sfr" | "stn" | "sdv" | "sth" => {
            FactIcon::new(
                "glyphicons glyphicons-soccer_ball",
                "oam_objects.spt:object",
            )
        }
        "spa" | "wel" | "wms" | "way" | "wth" | "wcu" | "wsn" | "wdt" | "waa" | "wbf" | "wac"
        | "wap" => FactIcon::new(
            "glyphicons glyphicons-heart_empty",
            "oam_objects.wel:object",
        ),
        "pet" => FactIcon::new("glyphicons glyphicons-dog", "oam_objects.pet:object"),
        "park" => FactIcon::new("glyphicons glyphicons-car", "oam_objects.park:object"),
        "chf" => FactIcon::new("fa fa-smile-o", "oam_objects.chf:object"),
        _ => return None,
    };
    Some(icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_icon_known() {
        let icon = fact_icon("wifi").unwrap();
        assert_eq!(icon.icon, "glyphicons glyphicons-wifi");
        assert_eq!(icon.name, "oam_objects.wifi:object");
    }

    #[test]
    fn test_fact_icon_grouped_codes() {
        assert_eq!(fact_icon("ipl"), fact_icon("pol"));
        assert_eq!(fact_icon("stn").unwrap().name, "oam_objects.spt:object");
        assert_eq!(fact_icon("wap").unwrap().name, "oam_objects.wel:object");
    }

    #[test]
    fn test_fact_icon_unknown() {
        assert_eq!(fact_icon("sauna"), None);
        assert_eq!(fact_icon(""), None);
    }
}
