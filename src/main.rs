mod config;
mod data;
mod dtos;
mod error;
mod models;
mod service;
mod store;
mod utils;

use std::sync::Arc;

use config::Config;
use dotenv::dotenv;
use tracing_subscriber::filter::LevelFilter;

use crate::store::client::StoreClient;
use crate::store::kv::{FileStore, MemoryStore};
use crate::store::profiledb::ProfileExt;

// Import the services
use service::{
    application_service::ApplicationService,
    auth::{AuthProvider, LocalAuthProvider},
    chat_service::ChatService,
    offer_service::OfferService,
    search_service::SearchService,
};

#[derive(Clone)]
pub struct AppState {
    pub env: Config,
    pub store: Arc<StoreClient>,
    // Services
    pub search_service: Arc<SearchService>,
    pub application_service: Arc<ApplicationService>,
    pub chat_service: Arc<ChatService>,
    pub offer_service: Arc<OfferService>,
    pub auth: Arc<LocalAuthProvider>,
}

impl AppState {
    pub fn new(store: StoreClient, config: Config) -> Self {
        let store_arc = Arc::new(store);

        // Initialize all services
        let search_service = Arc::new(SearchService::new(
            store_arc.clone(),
            data::listings::seed_listings(),
        ));
        let application_service = Arc::new(ApplicationService::new(
            store_arc.clone(),
            config.draft_ttl_hours,
        ));
        let chat_service = Arc::new(ChatService::new(store_arc.clone()));
        let offer_service = Arc::new(OfferService::new(store_arc.clone()));
        let auth = Arc::new(LocalAuthProvider::new());

        Self {
            env: config,
            store: store_arc,
            search_service,
            application_service,
            chat_service,
            offer_service,
            auth,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let store = match FileStore::new(&config.storage_dir) {
        Ok(file_store) => {
            println!("✅ Device store ready at {}", config.storage_dir);
            StoreClient::new(Arc::new(file_store))
        }
        Err(e) => {
            println!(
                "⚠️  Could not open {}: {} - Running in-memory",
                config.storage_dir, e
            );
            StoreClient::new(Arc::new(MemoryStore::default()))
        }
    };

    let app_state = Arc::new(AppState::new(store, config));

    println!("📦 Store backend: {}", app_state.store.backend_status());
    println!(
        "🏠 {} listings loaded, {} transit routes",
        app_state.search_service.listings().len(),
        data::transit::seed_routes().len()
    );

    // Restore persisted session state the screens pick up on launch
    match app_state.store.user_name().await {
        Ok(Some(name)) => println!("👋 Welcome back, {}", name),
        Ok(None) => tracing::debug!("No stored profile name yet"),
        Err(e) => tracing::error!("Failed to restore profile: {}", e),
    }
    match app_state.offer_service.user_status().await {
        Ok(status) => println!("👤 Resident status: {}", status.to_str()),
        Err(e) => tracing::error!("Failed to restore user status: {}", e),
    }
    match app_state.search_service.load_filters().await {
        Ok(filters) => tracing::debug!(
            "Restored search filters: R{}-R{}",
            filters.price_range.min,
            filters.price_range.max
        ),
        Err(e) => tracing::error!("Failed to restore search filters: {}", e),
    }
    match app_state.application_service.applications().await {
        Ok(applications) => println!("📄 {} submitted applications", applications.len()),
        Err(e) => tracing::error!("Failed to load applications: {}", e),
    }
    match app_state.chat_service.total_unread().await {
        Ok(unread) => println!("💬 {} unread messages", unread),
        Err(e) => tracing::error!("Failed to count unread messages: {}", e),
    }
    tracing::debug!(
        "Drafts expire after {} hours",
        app_state.env.draft_ttl_hours
    );

    if app_state.auth.current_user().await.is_none() {
        tracing::debug!("No signed-in user; screens start at the welcome flow");
    }

    println!("🚀 studynest core initialized");
}
