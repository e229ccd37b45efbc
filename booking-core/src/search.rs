/// Bus search assembly
/// Computes the set of providers serving both districts and joins it
/// against the destination's dropping points, optionally capped by price.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{DroppingPoint, Provider};

/// One searchable offer: a provider that serves both districts paired
/// with a priced dropping point in the destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOffer {
    pub provider: String,
    pub provider_details: Provider,
    pub from_district: String,
    pub to_district: String,
    pub dropping_point: String,
    pub fare: i64,
}

/// Cross the providers serving both districts with the destination's
/// dropping points at or under `max_price` (when supplied).
/// Callers should not rely on result ordering.
pub fn assemble_offers(
    from_district: &str,
    to_district: &str,
    from_providers: &[Provider],
    to_providers: &[Provider],
    dropping_points: &[DroppingPoint],
    max_price: Option<i64>,
) -> Vec<RouteOffer> {
    let from_names: HashSet<&str> = from_providers.iter().map(|p| p.name.as_str()).collect();

    let qualifying_points: Vec<&DroppingPoint> = dropping_points
        .iter()
        .filter(|dp| max_price.map_or(true, |max| dp.price <= max))
        .collect();

    let mut offers = Vec::new();
    for provider in to_providers {
        if !from_names.contains(provider.name.as_str()) {
            continue;
        }
        for dp in &qualifying_points {
            offers.push(RouteOffer {
                provider: provider.name.clone(),
                provider_details: provider.clone(),
                from_district: from_district.to_string(),
                to_district: to_district.to_string(),
                dropping_point: dp.name.clone(),
                fare: dp.price,
            });
        }
    }

    offers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: i64, name: &str) -> Provider {
        Provider {
            id,
            name: name.to_string(),
            contact_info: String::new(),
            address: String::new(),
            privacy_policy: String::new(),
        }
    }

    fn point(id: i64, name: &str, price: i64) -> DroppingPoint {
        DroppingPoint {
            id,
            district_id: 1,
            district_name: "B".to_string(),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_empty_intersection_yields_no_offers() {
        // P1 serves {A, B}, P2 serves {B, C}: searching A -> C shares no provider
        let from = vec![provider(1, "P1")];
        let to = vec![provider(2, "P2")];
        let points = vec![point(1, "Terminal", 400)];

        let offers = assemble_offers("A", "C", &from, &to, &points, None);
        assert!(offers.is_empty());
    }

    #[test]
    fn test_shared_provider_crossed_with_points() {
        // A -> B is served by P1 only
        let from = vec![provider(1, "P1")];
        let to = vec![provider(1, "P1"), provider(2, "P2")];
        let points = vec![point(1, "Terminal", 400), point(2, "Station Road", 550)];

        let offers = assemble_offers("A", "B", &from, &to, &points, None);
        assert_eq!(offers.len(), 2);
        assert!(offers.iter().all(|o| o.provider == "P1"));
        assert_eq!(offers[0].from_district, "A");
        assert_eq!(offers[0].to_district, "B");
    }

    #[test]
    fn test_max_price_filters_dropping_points() {
        let from = vec![provider(1, "P1")];
        let to = vec![provider(1, "P1")];
        let points = vec![point(1, "Terminal", 400), point(2, "Station Road", 550)];

        let offers = assemble_offers("A", "B", &from, &to, &points, Some(500));
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].dropping_point, "Terminal");
        assert_eq!(offers[0].fare, 400);
    }
}
