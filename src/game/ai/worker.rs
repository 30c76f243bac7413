//! Background AI thread
//!
//! Requests go in through one channel and replies come back through another. Each reply carries
//! the session revision and ply count of the position it was computed for, so the session can
//! discard answers to positions that have since changed (after an undo or a new game).

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use jungle_engine::{Board, Move, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::{compute_ai_move, AiConfig};
use crate::game::error::{GameError, GameResult};

struct AiRequest {
    board: Board,
    side: Side,
    config: AiConfig,
    revision: u64,
}

/// The worker's answer to one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiReply {
    pub side: Side,
    /// Session revision the request was made at
    pub revision: u64,
    /// Number of plies played in the position that was searched
    pub ply: usize,
    /// `None` when the side had no move
    pub mv: Option<Move>,
    pub thinking_time: Duration,
}

/// Handle to the AI thread; dropping it shuts the thread down
pub struct AiWorker {
    requests: Option<Sender<AiRequest>>,
    replies: Receiver<AiReply>,
    handle: Option<JoinHandle<()>>,
}

impl AiWorker {
    /// Start the thread. `seed` makes its choices reproducible.
    pub fn spawn(seed: Option<u64>) -> GameResult<Self> {
        let (request_tx, request_rx) = unbounded::<AiRequest>();
        let (reply_tx, reply_rx) = unbounded::<AiReply>();

        let handle = thread::Builder::new()
            .name("jungle-ai".into())
            .spawn(move || {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };

                for request in request_rx.iter() {
                    let start = Instant::now();
                    let mv = compute_ai_move(&request.board, request.side, &request.config, &mut rng);
                    let reply = AiReply {
                        side: request.side,
                        revision: request.revision,
                        ply: request.board.history().len(),
                        mv,
                        thinking_time: start.elapsed(),
                    };
                    debug!(
                        "[AI] worker answered for {} in {:?}",
                        reply.side, reply.thinking_time
                    );

                    if reply_tx.send(reply).is_err() {
                        break;
                    }
                }
                info!("[AI] worker stopped");
            })
            .map_err(|e| GameError::AiUnavailable {
                message: format!("failed to spawn worker thread: {}", e),
            })?;

        Ok(Self {
            requests: Some(request_tx),
            replies: reply_rx,
            handle: Some(handle),
        })
    }

    /// Queue a search of `board` for `side`
    ///
    /// `revision` is echoed back in the reply; pass [`Session::revision`](crate::game::Session::revision).
    pub fn request(
        &self,
        board: &Board,
        side: Side,
        config: AiConfig,
        revision: u64,
    ) -> GameResult<()> {
        let sender = self.requests.as_ref().ok_or_else(|| GameError::AiUnavailable {
            message: "worker is shutting down".into(),
        })?;

        sender
            .send(AiRequest {
                board: board.clone(),
                side,
                config,
                revision,
            })
            .map_err(|_| GameError::AiUnavailable {
                message: "worker thread has exited".into(),
            })
    }

    /// Non-blocking poll for a finished search
    pub fn try_reply(&self) -> GameResult<Option<AiReply>> {
        match self.replies.try_recv() {
            Ok(reply) => Ok(Some(reply)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(GameError::AiUnavailable {
                message: "worker thread has exited".into(),
            }),
        }
    }

    /// Block until the next reply arrives or `timeout` elapses
    pub fn wait_reply(&self, timeout: Duration) -> GameResult<Option<AiReply>> {
        match self.replies.recv_timeout(timeout) {
            Ok(reply) => Ok(Some(reply)),
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => Ok(None),
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                Err(GameError::AiUnavailable {
                    message: "worker thread has exited".into(),
                })
            }
        }
    }
}

impl Drop for AiWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker's loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("[AI] worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::{AiChooser, AiDifficulty};
    use jungle_engine::{legal_moves, new_game};

    #[test]
    fn test_worker_answers_request() {
        let worker = AiWorker::spawn(Some(17)).expect("spawn");
        let board = new_game();
        let config = AiConfig {
            difficulty: AiDifficulty::Easy,
            ..AiConfig::default()
        };

        worker.request(&board, Side::Light, config, 7).expect("request");
        let reply = worker
            .wait_reply(Duration::from_secs(30))
            .expect("worker alive")
            .expect("reply within timeout");

        assert_eq!(reply.side, Side::Light);
        assert_eq!(reply.revision, 7);
        assert_eq!(reply.ply, 0);
        let mv = reply.mv.expect("opening has moves");
        assert!(legal_moves(&board, Side::Light).contains(&mv));
    }

    #[test]
    fn test_poll_before_request_is_empty() {
        let worker = AiWorker::spawn(None).expect("spawn");
        assert_eq!(worker.try_reply().expect("alive"), None);
    }

    #[test]
    fn test_requests_answered_in_order() {
        let worker = AiWorker::spawn(Some(2)).expect("spawn");
        let config = AiConfig {
            chooser: AiChooser::MonteCarlo { iterations: 10 },
            ..AiConfig::default()
        };
        let board = new_game();

        worker.request(&board, Side::Light, config, 0).expect("first");
        worker.request(&board, Side::Dark, config, 0).expect("second");

        let timeout = Duration::from_secs(30);
        let first = worker.wait_reply(timeout).expect("alive").expect("first reply");
        let second = worker.wait_reply(timeout).expect("alive").expect("second reply");
        assert_eq!((first.side, second.side), (Side::Light, Side::Dark));
    }
}
