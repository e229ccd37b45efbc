/// Chat grounding-context assembly
/// Builds the structured data block injected into the completion prompt so
/// the model answers from catalog facts, plus the document-selection helpers.

use serde_json::json;

use crate::catalog::{routes_by_provider, District, Document, DroppingPoint, RouteRecord};

/// Translate a free-text query into a canned document search term.
/// First-match priority: cancellation before contact before address.
/// Falls back to the raw query when no keyword class matches.
pub fn search_term_for(query: &str) -> String {
    let query_lower = query.to_lowercase();

    if query_lower.contains("cancel") || query_lower.contains("refund") {
        "Cancellation Policy".to_string()
    } else if query_lower.contains("contact")
        || query_lower.contains("phone")
        || query_lower.contains("email")
    {
        "Contact Information".to_string()
    } else if query_lower.contains("address") {
        "Official Address".to_string()
    } else {
        query.to_string()
    }
}

/// Provider names that appear in the query, matched case-insensitively
/// on both sides.
pub fn providers_named_in_query<'a>(query: &str, provider_names: &'a [String]) -> Vec<&'a String> {
    let query_lower = query.to_lowercase();
    provider_names
        .iter()
        .filter(|name| query_lower.contains(&name.to_lowercase()))
        .collect()
}

/// Drop documents with content identical to an earlier one,
/// preserving first-seen order. The key is the literal content,
/// not the document id.
pub fn dedup_documents(documents: Vec<Document>) -> Vec<Document> {
    let mut seen: Vec<String> = Vec::new();
    let mut unique = Vec::new();
    for doc in documents {
        if seen.contains(&doc.content) {
            continue;
        }
        seen.push(doc.content.clone());
        unique.push(doc);
    }
    unique
}

/// Assemble the system prompt for the completion service: the full catalog
/// rendered as data followed by fixed answering instructions.
pub fn build_system_context(
    districts: &[District],
    routes: &[RouteRecord],
    dropping_points: &[DroppingPoint],
    documents: &[Document],
) -> String {
    let district_names: Vec<&str> = districts.iter().map(|d| d.name.as_str()).collect();

    let mut routes_map = serde_json::Map::new();
    for (provider, served) in routes_by_provider(routes) {
        routes_map.insert(provider, json!(served));
    }

    let mut price_map = serde_json::Map::new();
    for dp in dropping_points {
        let entry = price_map
            .entry(dp.district_name.clone())
            .or_insert_with(|| json!([]));
        if let Some(points) = entry.as_array_mut() {
            points.push(json!({"dropping_point": dp.name, "price": dp.price}));
        }
    }

    let document_text = documents
        .iter()
        .map(|doc| doc.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are a helpful bus booking assistant. Use the following information to answer questions:\n\n\
         AVAILABLE DISTRICTS: {}\n\n\
         BUS PROVIDERS AND THEIR ROUTES:\n{}\n\n\
         DROPPING POINTS AND FARES BY DISTRICT:\n{}\n\n\
         PROVIDER DETAILS:\n{}\n\n\
         Answer the user's question accurately based on this data. \
         If asking about routes or availability, check if both districts are served by the same provider. \
         For fare information, cross-reference the provider's coverage against the destination's dropping points, \
         and always state the dropping point alongside any price you quote.",
        json!(district_names),
        serde_json::to_string_pretty(&routes_map).unwrap_or_default(),
        serde_json::to_string_pretty(&price_map).unwrap_or_default(),
        document_text,
    )
}
