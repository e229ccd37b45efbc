/// Chat assistant
/// Grounds answers in catalog and document data via the Groq completion
/// API when a credential is configured, and falls back to deterministic
/// keyword routing otherwise. Never fails past its own boundary: every
/// error path resolves to a returned string.

use anyhow::Result;
use booking_core::{
    build_system_context, classify_query, dedup_documents, format_contact_lines,
    format_route_summary, providers_named_in_query, search_term_for, Document, FallbackIntent,
    GENERIC_FALLBACK,
};
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::llm::call_completion;
use crate::store::{DistrictStore, DocumentStore, DroppingPointStore, ProviderStore, RouteStore};

/// Per-provider document cap on the direct-match path.
const DIRECT_MATCH_LIMIT: i64 = 1;
/// Result cap on the generic search path.
const SEARCH_LIMIT: i64 = 3;

pub struct ChatAssistant {
    /// None means fallback mode for the process lifetime.
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
    districts: DistrictStore,
    providers: ProviderStore,
    routes: RouteStore,
    dropping_points: DroppingPointStore,
    documents: DocumentStore,
}

impl ChatAssistant {
    pub fn new(config: &AppConfig, pool: SqlitePool) -> Self {
        if config.groq_api_key.is_none() {
            tracing::warn!("[CHAT] No GROQ API key configured, running in fallback mode");
        }
        Self {
            api_key: config.groq_api_key.clone(),
            model: config.groq_model.clone(),
            client: reqwest::Client::new(),
            districts: DistrictStore::new(pool.clone()),
            providers: ProviderStore::new(pool.clone()),
            routes: RouteStore::new(pool.clone()),
            dropping_points: DroppingPointStore::new(pool.clone()),
            documents: DocumentStore::new(pool),
        }
    }

    /// Answer a free-text question. Failures are folded into the reply.
    pub async fn process_query(&self, user_query: &str) -> String {
        let result = match &self.api_key {
            Some(api_key) => self.grounded_answer(api_key, user_query).await,
            None => self.fallback_answer(user_query).await,
        };

        match result {
            Ok(answer) => answer,
            Err(e) => format!("I encountered an error processing your request: {}", e),
        }
    }

    /// Grounded mode: assemble the catalog context, select relevant
    /// documents and delegate to the completion service.
    async fn grounded_answer(&self, api_key: &str, user_query: &str) -> Result<String> {
        let districts = self.districts.get_all().await?;
        let providers = self.providers.get_all().await?;
        let routes = self.routes.get_all().await?;
        let dropping_points = self.dropping_points.get_all().await?;

        let provider_names: Vec<String> = providers.iter().map(|p| p.name.clone()).collect();
        let documents = self.select_documents(user_query, &provider_names).await?;

        let system_context =
            build_system_context(&districts, &routes, &dropping_points, &documents);

        tracing::info!(
            "[CHAT] Grounded query: {} documents selected, context {} bytes",
            documents.len(),
            system_context.len()
        );

        call_completion(&self.client, api_key, &self.model, &system_context, user_query).await
    }

    /// Pick the documents to inject: direct provider-name matches first
    /// (up to one document each), otherwise a capped substring search on
    /// the translated search term. Deduplicated by exact content.
    async fn select_documents(
        &self,
        user_query: &str,
        provider_names: &[String],
    ) -> Result<Vec<Document>> {
        let matched = providers_named_in_query(user_query, provider_names);

        let mut selected = Vec::new();
        for name in &matched {
            selected.extend(self.documents.search(name, DIRECT_MATCH_LIMIT).await?);
        }

        if matched.is_empty() {
            let term = search_term_for(user_query);
            selected = self.documents.search(&term, SEARCH_LIMIT).await?;
        }

        Ok(dedup_documents(selected))
    }

    /// Fallback mode: deterministic keyword-routed answers from the
    /// stores, no model call.
    async fn fallback_answer(&self, user_query: &str) -> Result<String> {
        match classify_query(user_query) {
            FallbackIntent::Contact => {
                let documents = self.documents.get_all().await?;
                Ok(format_contact_lines(&documents))
            }
            FallbackIntent::Routes => {
                let routes = self.routes.get_all().await?;
                Ok(format_route_summary(&routes))
            }
            FallbackIntent::Generic => Ok(GENERIC_FALLBACK.to_string()),
        }
    }
}
