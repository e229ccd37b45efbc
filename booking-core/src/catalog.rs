/// Catalog record types shared between the stores, the search assembler
/// and the chat context assembler.

use serde::{Deserialize, Serialize};

/// A destination district. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
}

/// A named stop within a district, carrying its own fare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroppingPoint {
    pub id: i64,
    pub district_id: i64,
    pub district_name: String,
    pub name: String,
    pub price: i64,
}

/// A bus operator. Contact info and address are parsed out of the
/// provider's info document at seed time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub contact_info: String,
    pub address: String,
    pub privacy_policy: String,
}

/// A provider-serves-district association, with both names joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: i64,
    pub provider_id: i64,
    pub district_id: i64,
    pub provider_name: String,
    pub district_name: String,
}

/// Free-text provider document used as the substring-search corpus.
/// The provider_name tag is advisory only, not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub provider_name: String,
    pub content: String,
}

/// Group routes into a provider -> served-districts mapping,
/// preserving first-seen provider order.
pub fn routes_by_provider(routes: &[RouteRecord]) -> Vec<(String, Vec<String>)> {
    let mut summary: Vec<(String, Vec<String>)> = Vec::new();
    for route in routes {
        match summary.iter_mut().find(|(name, _)| name == &route.provider_name) {
            Some((_, districts)) => districts.push(route.district_name.clone()),
            None => summary.push((route.provider_name.clone(), vec![route.district_name.clone()])),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: i64, provider: &str, district: &str) -> RouteRecord {
        RouteRecord {
            id,
            provider_id: 0,
            district_id: 0,
            provider_name: provider.to_string(),
            district_name: district.to_string(),
        }
    }

    #[test]
    fn test_routes_by_provider_groups_and_preserves_order() {
        let routes = vec![
            route(1, "Hanif", "Dhaka"),
            route(2, "Green Line", "Sylhet"),
            route(3, "Hanif", "Rajshahi"),
        ];

        let summary = routes_by_provider(&routes);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].0, "Hanif");
        assert_eq!(summary[0].1, vec!["Dhaka".to_string(), "Rajshahi".to_string()]);
        assert_eq!(summary[1].0, "Green Line");
        assert_eq!(summary[1].1, vec!["Sylhet".to_string()]);
    }
}
