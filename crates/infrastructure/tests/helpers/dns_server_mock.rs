#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Echo the question and answer it with one A record.
    AnswerA([u8; 4]),
    /// Reply with these bytes, with the query id patched in.
    Fixed(Vec<u8>),
    /// Read the query and never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral loopback port and serves until shut down or dropped.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_mock_response(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_mock_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        match behavior {
            MockBehavior::Silent => None,
            MockBehavior::Fixed(bytes) => {
                let mut response = bytes.clone();
                if response.len() >= 2 {
                    response[0..2].copy_from_slice(&query[0..2]);
                }
                Some(response)
            }
            MockBehavior::AnswerA(octets) => {
                let mut response = Vec::with_capacity(512);
                response.extend_from_slice(&query[0..2]);
                // QR, RD copied from the query, RA
                response.push(0x80 | (query[2] & 0x01));
                response.push(0x80);
                response.extend_from_slice(&query[4..6]);
                response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
                response.extend_from_slice(&query[12..]);
                response.extend_from_slice(&[
                    0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c, 0x00, 0x04,
                ]);
                response.extend_from_slice(octets);
                Some(response)
            }
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
