//! Marker icon names per service.

/// Icon used for services without a dedicated one.
pub const DEFAULT_ICON: &str = "signal";

const SERVICE_ICONS: [(&str, &str); 10] = [
    ("Broadcasting", "tower-broadcast"),
    ("Mobile", "signal"),
    ("Cellular", "tower-cell"),
    ("Satellite", "satellite-dish"),
    ("Microwave", "wifi"),
    ("Radio", "radio"),
    ("TV", "tv"),
    ("Amateur", "walkie-talkie"),
    ("Maritime", "ship"),
    ("Aviation", "plane"),
];

/// Font Awesome icon name for a service. Matching is exact.
pub fn service_icon(service: &str) -> &'static str {
    SERVICE_ICONS
        .iter()
        .find(|(name, _)| *name == service)
        .map_or(DEFAULT_ICON, |(_, icon)| *icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_services() {
        assert_eq!(service_icon("Broadcasting"), "tower-broadcast");
        assert_eq!(service_icon("Satellite"), "satellite-dish");
        assert_eq!(service_icon("broadcasting"), DEFAULT_ICON);
        assert_eq!(service_icon("Fixed"), DEFAULT_ICON);
    }
}
