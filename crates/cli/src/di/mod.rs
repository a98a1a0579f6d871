use rootwalk_application::use_cases::ResolveHostUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::IterativeResolver;
use std::sync::Arc;

pub struct Services {
    pub resolve_host: Arc<ResolveHostUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let resolver = Arc::new(IterativeResolver::from_config(config.resolver.clone()));

        Self {
            resolve_host: Arc::new(ResolveHostUseCase::new(resolver)),
        }
    }
}
