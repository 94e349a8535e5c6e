//! Container lookup by name

use crate::daemon::ContainerRecord;

/// First record whose alias set contains exactly `/<name>`
///
/// The runtime does not promise unique aliases, so list order breaks ties.
pub fn by_name<'a>(records: &'a [ContainerRecord], name: &str) -> Option<&'a ContainerRecord> {
    let target = format!("/{name}");
    records
        .iter()
        .find(|record| record.names.iter().any(|alias| *alias == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(names: &[&str], image: &str) -> ContainerRecord {
        ContainerRecord {
            names: names.iter().map(|n| n.to_string()).collect(),
            image: image.to_string(),
            status: "Up 1 minute".to_string(),
            ports: vec![],
        }
    }

    #[test]
    fn test_exact_alias_match() {
        let records = vec![record(&["/db"], "postgres"), record(&["/web"], "nginx")];
        assert_eq!(by_name(&records, "web").unwrap().image, "nginx");
    }

    #[test]
    fn test_no_substring_or_image_match() {
        let records = vec![
            record(&["/web-1"], "web"),
            record(&["/my/web"], "nginx"),
            record(&["web"], "nginx"),
        ];
        assert!(by_name(&records, "web").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let records = vec![record(&["/app"], "first"), record(&["/app"], "second")];
        assert_eq!(by_name(&records, "app").unwrap().image, "first");
    }

    #[test]
    fn test_secondary_alias_matches() {
        let records = vec![record(&["/frontend/web", "/web"], "nginx")];
        assert!(by_name(&records, "web").is_some());
    }

    #[test]
    fn test_empty_list() {
        assert!(by_name(&[], "web").is_none());
    }
}
