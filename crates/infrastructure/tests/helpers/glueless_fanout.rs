use super::ResponseBuilder;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use rootwalk_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use rootwalk_infrastructure::dns::wire::Message;
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;

const FINAL_ADDR: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 1);

/// Hostile zone: every name `d<k>-<n>.evil` below `depth_cap` answers with a
/// glueless referral to a fresh `d<k+1>-<m>.evil`, until it has been asked
/// `referrals_per_name` times. Names at the cap, and names past their quota,
/// answer with an A record. Without a shared query budget the walk grows
/// exponentially with depth.
pub struct GluelessFanout {
    depth_cap: usize,
    referrals_per_name: usize,
    state: Mutex<FanoutState>,
}

#[derive(Default)]
struct FanoutState {
    asked: HashMap<String, usize>,
    next_id: usize,
    sent: usize,
}

impl GluelessFanout {
    pub fn new(depth_cap: usize, referrals_per_name: usize) -> Self {
        Self {
            depth_cap,
            referrals_per_name,
            state: Mutex::new(FanoutState::default()),
        }
    }

    pub fn sent(&self) -> usize {
        self.state.lock().unwrap().sent
    }
}

fn level(name: &str) -> usize {
    name.strip_prefix('d')
        .and_then(|rest| rest.split('-').next())
        .and_then(|k| k.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl DnsTransport for GluelessFanout {
    async fn send(
        &self,
        _server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let request = Message::parse(message_bytes)?;
        let name = request.questions[0].name.clone();
        let k = level(&name);

        let mut state = self.state.lock().unwrap();
        state.sent += 1;
        let asked = state.asked.entry(name.clone()).or_insert(0);
        *asked += 1;
        let exhausted = *asked > self.referrals_per_name;

        let response = if k >= self.depth_cap || exhausted {
            ResponseBuilder::new().answer_a(&name, FINAL_ADDR)
        } else {
            state.next_id += 1;
            let next = format!("d{}-{}.evil", k + 1, state.next_id);
            ResponseBuilder::new().authority_ns(&name, &next)
        };

        Ok(TransportResponse {
            bytes: response.build(message_bytes),
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
