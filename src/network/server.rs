use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message, WebSocketStream};
use tracing::{error, info, warn};

use crate::assessment::AssessmentFlow;
use crate::protocol::ClientAction;

/// Sink half of one visitor's WebSocket connection.
type WsSink = SplitSink<WebSocketStream<TcpStream>, Message>;

/// The assessment session server.
///
/// Listens for WebSocket connections and runs each one as an isolated
/// assessment session. The server is authoritative: clients send
/// actions, the server applies them to the session's flow and replies
/// with the snapshot for whatever phase the flow is now in. Rejected
/// actions re-send the unchanged snapshot.
pub async fn start(addr: &str) {
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind assessment server on {}: {}", addr, e));

    info!("Assessment server listening on ws://{}", addr);

    while let Ok((stream, peer)) = listener.accept().await {
        info!("New connection from: {}", peer);
        tokio::spawn(run_session(stream));
    }
}

/// Drive one connection's assessment from handshake to disconnect.
async fn run_session(stream: TcpStream) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            error!("WebSocket handshake failed: {}", e);
            return;
        }
    };

    let (mut write, mut read) = ws_stream.split();
    let mut flow = AssessmentFlow::new();

    // The intro snapshot greets the client before any action arrives.
    if send_snapshot(&mut write, &flow).await.is_err() {
        return;
    }

    while let Some(result) = read.next().await {
        match result {
            Ok(msg) => {
                if !msg.is_binary() {
                    continue;
                }
                let data = msg.into_data();
                match rmp_serde::from_slice::<ClientAction>(&data) {
                    Ok(action) => {
                        if let Err(reason) = apply_action(&mut flow, action) {
                            warn!("Rejected client action: {}", reason);
                        }
                        if send_snapshot(&mut write, &flow).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to decode ClientAction: {}", e);
                    }
                }
            }
            Err(e) => {
                error!("WebSocket read error: {}", e);
                break;
            }
        }
    }

    info!("Session closed");
}

fn apply_action(flow: &mut AssessmentFlow, action: ClientAction) -> Result<(), String> {
    match action {
        ClientAction::Start => flow.start(),
        ClientAction::Answer { score } => flow.answer(score),
        ClientAction::Back => flow.back(),
        ClientAction::Restart => {
            flow.restart();
            Ok(())
        }
    }
}

/// Serialize the flow's current snapshot via msgpack and send it.
/// Returns `Err` only when the connection is no longer writable.
async fn send_snapshot(write: &mut WsSink, flow: &AssessmentFlow) -> Result<(), ()> {
    let msg = flow.snapshot();
    match rmp_serde::to_vec_named(&msg) {
        Ok(bytes) => {
            if let Err(e) = write.send(Message::Binary(bytes.into())).await {
                error!("Failed to send WebSocket message: {}", e);
                return Err(());
            }
            Ok(())
        }
        Err(e) => {
            error!("Failed to serialize ServerMessage: {}", e);
            Ok(())
        }
    }
}
