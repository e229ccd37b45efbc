/// Booking core library
/// Pure domain logic shared by the HTTP server and the seeding binary:
/// - Catalog record types
/// - Bus search assembly (provider intersection x priced dropping points)
/// - Chat grounding-context assembly and keyword fallback routing

pub mod catalog;
pub mod context;
pub mod fallback;
pub mod search;

pub use catalog::{District, Document, DroppingPoint, Provider, RouteRecord};
pub use context::{build_system_context, dedup_documents, providers_named_in_query, search_term_for};
pub use fallback::{classify_query, format_contact_lines, format_route_summary, FallbackIntent, GENERIC_FALLBACK};
pub use search::{assemble_offers, RouteOffer};
