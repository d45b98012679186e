use dnsprobe_application::use_cases::PerformLookupUseCase;
use dnsprobe_domain::Config;
use dnsprobe_infrastructure::dns::{SystemAddressResolver, UdpTransport, WireCodec};
use std::sync::Arc;
use tracing::debug;

pub struct LookupServices {
    pub lookup: Arc<PerformLookupUseCase>,
}

impl LookupServices {
    pub fn new(config: &Config) -> Self {
        let timeout = config.upstream.timeout();

        debug!(
            timeout_secs = config.upstream.timeout_secs,
            max_response_size = config.upstream.max_response_size,
            "Wiring lookup services"
        );

        let lookup = Arc::new(PerformLookupUseCase::new(
            Arc::new(SystemAddressResolver::new(timeout)),
            Arc::new(UdpTransport::new(config.upstream.max_response_size)),
            Arc::new(WireCodec::new()),
            timeout,
        ));

        Self { lookup }
    }
}
