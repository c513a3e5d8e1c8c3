use crate::engine::follower::instance::{Facing, FollowerInstance, FollowerModel, FollowerPhase};
use crate::engine::loading::model_loader::LoadFailure;
use crate::engine::target::TargetState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Follower state as reported to the parent page.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FollowerSnapshot {
    pub id: String,
    pub spawn: [f32; 3],
    pub state: &'static str,
    pub reorientations: u32,
}

/// Resource queuing outgoing notifications and responses.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the parent page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the WebRPC layer for iframe deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_target_changes,
                    notify_follower_binds,
                    notify_load_failures,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) =
                window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
                return;
            }
        }
        None => {
            error!("Window object not available");
            return;
        }
    }

    // Hand the closure to JS so it outlives this system.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Message queue filled by the WASM message listener.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw RPC message received from the parent page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    target: Res<TargetState>,
    followers: Query<(&FollowerInstance, Option<&LoadFailure>)>,
    facings: Query<&Facing>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                let snapshots = follower_snapshots(&followers, &facings);
                if let Some(response) = handle_rpc_request(&request, &target, &snapshots) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Failed to parse RPC message: {}", parse_error);
            }
        }
    }
}

fn follower_snapshots(
    followers: &Query<(&FollowerInstance, Option<&LoadFailure>)>,
    facings: &Query<&Facing>,
) -> Vec<FollowerSnapshot> {
    let mut snapshots: Vec<FollowerSnapshot> = followers
        .iter()
        .map(|(follower, failure)| {
            let reorientations = follower
                .model()
                .and_then(|model| facings.get(model).ok())
                .map_or(0, |facing| facing.reorientations);
            snapshot(follower, failure.is_some(), reorientations)
        })
        .collect();
    snapshots.sort_by(|a, b| a.id.cmp(&b.id));
    snapshots
}

fn snapshot(follower: &FollowerInstance, failed: bool, reorientations: u32) -> FollowerSnapshot {
    let state = match (follower.phase(), failed) {
        (FollowerPhase::Bound, _) => "bound",
        (FollowerPhase::Loading, true) => "failed",
        (FollowerPhase::Loading, false) => "loading",
    };
    FollowerSnapshot {
        id: follower.id().to_string(),
        spawn: follower.spawn().to_array(),
        state,
        reorientations,
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    target: &TargetState,
    followers: &[FollowerSnapshot],
) -> Option<RpcResponse> {
    // Notifications carry no ID and get no response.
    let id = request.id.clone()?;

    if request.jsonrpc != "2.0" {
        return Some(create_error_response(
            id,
            -32600,
            "Invalid request",
            Some(serde_json::json!({"jsonrpc": request.jsonrpc})),
        ));
    }

    let result = match request.method.as_str() {
        "get_target" => handle_get_target(target),
        "get_followers" => handle_get_followers(followers),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_get_target(target: &TargetState) -> Result<serde_json::Value, RpcError> {
    Ok(position_json(target.position()))
}

fn handle_get_followers(followers: &[FollowerSnapshot]) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(followers)
        .map(|followers| serde_json::json!({ "followers": followers }))
        .map_err(|e| RpcError::internal_error(&e.to_string()))
}

fn position_json(position: Vec3) -> serde_json::Value {
    serde_json::json!({
        "x": position.x,
        "y": position.y,
        "z": position.z
    })
}

fn notify_target_changes(target: Res<TargetState>, mut rpc_interface: ResMut<WebRpcInterface>) {
    if target.is_changed() && !target.is_added() {
        rpc_interface.send_notification("target_changed", position_json(target.position()));
    }
}

fn notify_follower_binds(
    models: Query<(&FollowerModel, &Facing), Added<FollowerModel>>,
    followers: Query<&FollowerInstance>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for (model, facing) in &models {
        let Ok(follower) = followers.get(model.follower) else {
            continue;
        };
        rpc_interface.send_notification(
            "follower_bound",
            serde_json::json!({
                "id": follower.id(),
                "target": facing.target.map(position_json)
            }),
        );
    }
}

fn notify_load_failures(
    failures: Query<(&FollowerInstance, &LoadFailure), Added<LoadFailure>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for (follower, failure) in &failures {
        rpc_interface.send_notification(
            "follower_load_failed",
            serde_json::json!({
                "id": follower.id(),
                "error": failure.0.to_string()
            }),
        );
    }
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the parent page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
