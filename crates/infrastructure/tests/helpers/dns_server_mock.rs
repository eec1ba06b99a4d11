use super::wire::{build_response, ParsedQuery, WireAnswer};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock answers for one query.
#[derive(Debug, Clone)]
pub enum MockReply {
    Answer {
        rcode: u8,
        answers: Vec<WireAnswer>,
    },
    /// UDP gets an empty TC=1 reply; TCP gets the full answer.
    Truncated(Vec<WireAnswer>),
    /// Reply with an ID that does not match the query.
    WrongId,
    /// Never reply.
    Silent,
}

impl MockReply {
    pub fn answers(answers: Vec<WireAnswer>) -> Self {
        MockReply::Answer { rcode: 0, answers }
    }

    pub fn rcode(rcode: u8) -> Self {
        MockReply::Answer {
            rcode,
            answers: Vec::new(),
        }
    }
}

pub type Responder = Arc<dyn Fn(&ParsedQuery) -> MockReply + Send + Sync>;

/// In-process authoritative server on 127.0.0.1 serving UDP and TCP on the
/// same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<(String, u16, &'static str)>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(responder: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&ParsedQuery) -> MockReply + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let responder: Responder = Arc::new(responder);
        let queries = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_responder = responder.clone();
        let udp_queries = queries.clone();
        let tcp_responder = responder;
        let tcp_queries = queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Some(query) = ParsedQuery::parse(&buf[..len]) else { continue };
                        udp_queries.lock().unwrap().push((query.name.clone(), query.qtype, "UDP"));

                        let reply = match udp_responder(&query) {
                            MockReply::Answer { rcode, answers } => {
                                Some(build_response(&query, rcode, false, &answers))
                            }
                            MockReply::Truncated(_) => Some(build_response(&query, 0, true, &[])),
                            MockReply::WrongId => {
                                let mut other = query.clone();
                                other.id = query.id.wrapping_add(1);
                                Some(build_response(&other, 0, false, &[]))
                            }
                            MockReply::Silent => None,
                        };
                        if let Some(reply) = reply {
                            let _ = socket.send_to(&reply, peer).await;
                        }
                    }
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let responder = tcp_responder.clone();
                        let queries = tcp_queries.clone();
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut body = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut body).await.is_err() {
                                return;
                            }
                            let Some(query) = ParsedQuery::parse(&body) else { return };
                            queries.lock().unwrap().push((query.name.clone(), query.qtype, "TCP"));

                            let reply = match responder(&query) {
                                MockReply::Answer { rcode, answers } => {
                                    build_response(&query, rcode, false, &answers)
                                }
                                MockReply::Truncated(answers) => {
                                    build_response(&query, 0, false, &answers)
                                }
                                MockReply::WrongId | MockReply::Silent => return,
                            };
                            let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                            let _ = stream.write_all(&reply).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// (name, qtype, protocol) of every query received so far.
    pub fn queries(&self) -> Vec<(String, u16, &'static str)> {
        self.queries.lock().unwrap().clone()
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
