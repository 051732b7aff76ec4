use std::sync::Arc;

use crate::config::Config;
use crate::translate::TranslatorService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<TranslatorService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let translator = Arc::new(TranslatorService::new(config.clone()));
        Self { config, translator }
    }

    /// State around an already-built translator, e.g. one with a custom backend.
    pub fn with_translator(config: Arc<Config>, translator: TranslatorService) -> Self {
        Self {
            config,
            translator: Arc::new(translator),
        }
    }
}
