/// Display label of a menu status code
pub fn menu_status_label(status: &str) -> &'static str {
    match status {
        "active" => "Actif",
        "inactive" => "Inactif",
        "discontinued" => "Discontinué",
        _ => "Statut inconnu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_status_label() {
        assert_eq!(menu_status_label("active"), "Actif");
        assert_eq!(menu_status_label("discontinued"), "Discontinué");
        assert_eq!(menu_status_label("ACTIVE"), "Statut inconnu");
    }
}
