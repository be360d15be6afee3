//! Event dispatcher - entry point for every platform invocation

use super::context::CallContext;
use super::handlers::{
    ActionSuccessfulHandler, DigitsReceivedHandler, EventHandler, HangupHandler, NewCallHandler,
    RingingHandler,
};
use crate::domain::action::{error_sequence, ActionResponse, AudioAssets};
use crate::domain::call::{CallEvent, CallPhase, InvocationEventType};
use crate::domain::shared::error::DomainError;
use crate::domain::shared::value_objects::CallId;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Result of dispatching one event
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Raw event kind, `NO-EVENT` when absent
    pub event_type: String,
    pub response: ActionResponse,
    /// Set when the response came from the recovery path
    pub error: Option<DomainError>,
}

/// Routes events to the handler registered for their kind
pub struct CallController {
    assets: AudioAssets,
    handlers: HashMap<InvocationEventType, Arc<dyn EventHandler>>,
}

impl CallController {
    /// Controller with no handlers registered
    pub fn empty(assets: AudioAssets) -> Self {
        Self {
            assets,
            handlers: HashMap::new(),
        }
    }

    /// Controller wired with the voice focus call flow.
    ///
    /// ACTION_FAILED and INVALID_LAMBDA_RESPONSE need no handler: the
    /// classifier turns them into errors before routing.
    pub fn new(assets: AudioAssets) -> Self {
        let mut controller = Self::empty(assets.clone());

        controller.register_handler(
            InvocationEventType::NewInboundCall,
            Arc::new(NewCallHandler::new(assets)),
        );
        controller.register_handler(InvocationEventType::Ringing, Arc::new(RingingHandler));
        controller.register_handler(
            InvocationEventType::ActionSuccessful,
            Arc::new(ActionSuccessfulHandler),
        );
        controller.register_handler(
            InvocationEventType::DigitsReceived,
            Arc::new(DigitsReceivedHandler::default()),
        );
        controller.register_handler(InvocationEventType::Hangup, Arc::new(HangupHandler));
        controller
    }

    pub fn register_handler(&mut self, kind: InvocationEventType, handler: Arc<dyn EventHandler>) {
        self.handlers.insert(kind, handler);
    }

    /// Handle a raw event, always producing a schema-valid response
    pub fn handle(&self, raw: &Value) -> ActionResponse {
        self.dispatch(raw).response
    }

    pub fn dispatch(&self, raw: &Value) -> Dispatch {
        let event: CallEvent = match serde_json::from_value(raw.clone()) {
            Ok(event) => event,
            Err(e) => {
                let err = DomainError::ValidationError(format!("malformed event: {}", e));
                let event_type = raw
                    .get("InvocationEventType")
                    .and_then(Value::as_str)
                    .unwrap_or("NO-EVENT")
                    .to_string();
                return self.recover(event_type, recover_call_id(raw), raw, err);
            }
        };

        let event_type = event.kind().to_string();
        let ctx = match CallContext::from_event(&event) {
            Ok(ctx) => ctx,
            Err(err) => return self.recover(event_type, None, raw, err),
        };

        info!("RECV {} {} event received", ctx, event_type);

        let result = CallPhase::classify(&event).and_then(|phase| {
            debug!("RECV {} Call phase {}", ctx, phase.as_str());
            match self.handlers.get(event.kind()) {
                Some(handler) => handler.handle(&ctx, phase, &event),
                None => Err(DomainError::UnsupportedEvent(event_type.clone())),
            }
        });

        match result {
            Ok(response) => Dispatch {
                event_type,
                response,
                error: None,
            },
            Err(err) => self.recover(event_type, Some(ctx.call_id), raw, err),
        }
    }

    /// Play the failure prompt and hang up when the call is known, else do nothing.
    fn recover(
        &self,
        event_type: String,
        call_id: Option<CallId>,
        raw: &Value,
        err: DomainError,
    ) -> Dispatch {
        error!(
            "RECV Call-ID:{} Unhandled event: {} ({}) {}",
            call_id.as_ref().map(CallId::as_str).unwrap_or("-"),
            event_type,
            err,
            raw
        );

        let response = match call_id {
            Some(call_id) => error_sequence(&call_id, &self.assets),
            None => ActionResponse::empty(),
        };
        Dispatch {
            event_type,
            response,
            error: Some(err),
        }
    }
}

/// Best-effort call id lookup on an event that failed to deserialize
fn recover_call_id(raw: &Value) -> Option<CallId> {
    raw.pointer("/CallDetails/Participants/0/CallId")
        .and_then(Value::as_str)
        .map(CallId::new)
}
