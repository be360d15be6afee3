//! Call phase handlers
//!
//! One handler per event kind. Each turns an event into the next ordered
//! action sequence; failures are returned to the dispatcher, which owns the
//! single recovery path.

use super::context::CallContext;
use crate::domain::action::audio::{INVALID_ENTRY_PROMPT, WELCOME_PROMPT};
use crate::domain::action::{Action, ActionResponse, AudioAssets};
use crate::domain::call::{bridged_legs, other_leg, CallEvent, CallPhase};
use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::{DestinationNumber, DialPlan};
use crate::infrastructure::ivr::{ControlAction, ControlMenu, DtmfDigit, LegTarget};
use tracing::{debug, info, warn};

/// Trait for handling one kind of lifecycle event
#[cfg_attr(test, mockall::automock)]
pub trait EventHandler: Send + Sync {
    fn handle(
        &self,
        ctx: &CallContext,
        phase: CallPhase,
        event: &CallEvent,
    ) -> Result<ActionResponse>;
}

/// Greets a new caller and collects the destination number
pub struct NewCallHandler {
    assets: AudioAssets,
}

impl NewCallHandler {
    pub fn new(assets: AudioAssets) -> Self {
        Self { assets }
    }
}

impl EventHandler for NewCallHandler {
    fn handle(
        &self,
        ctx: &CallContext,
        _phase: CallPhase,
        _event: &CallEvent,
    ) -> Result<ActionResponse> {
        info!("SEND {} Sending PlayAudioAndGetDigits action to get Destination Number", ctx);
        Ok(ActionResponse::new(vec![
            Action::pause(&ctx.call_id),
            Action::play_audio_and_get_digits(
                &ctx.call_id,
                DialPlan::PATTERN,
                self.assets.source(WELCOME_PROMPT),
                self.assets.source(INVALID_ENTRY_PROMPT),
            ),
        ]))
    }
}

pub struct RingingHandler;

impl EventHandler for RingingHandler {
    fn handle(
        &self,
        ctx: &CallContext,
        _phase: CallPhase,
        _event: &CallEvent,
    ) -> Result<ActionResponse> {
        debug!("NONE {} Acknowledging ringing", ctx);
        Ok(ActionResponse::empty())
    }
}

/// Advances the call once the previous action completed
pub struct ActionSuccessfulHandler;

impl ActionSuccessfulHandler {
    fn bridge(ctx: &CallContext, event: &CallEvent) -> Result<ActionResponse> {
        let digits = event.received_digits()?;
        if !DialPlan::permits(digits) {
            warn!("RECV {} Collected digits {} fall outside the dial plan", ctx, digits);
        }
        let destination = DestinationNumber::from_digits(digits)?;
        let caller_id = &event.first_participant()?.to;
        if caller_id.is_empty() {
            return Err(DomainError::MissingField("CallDetails.Participants[0].To"));
        }

        info!("SEND {} Sending CallAndBridge action to {}", ctx, destination);
        Ok(Action::call_and_bridge(caller_id, &destination).into())
    }

    fn enable_voice_focus(ctx: &CallContext, event: &CallEvent) -> Result<ActionResponse> {
        let legs = bridged_legs(event.participants())?;

        info!("SEND {} Sending VoiceFocus command for both participants", ctx);
        Ok(ActionResponse::new(
            legs.iter()
                .map(|leg| Action::voice_focus(&leg.call_id, true))
                .collect(),
        ))
    }

    fn enable_dtmf_control(ctx: &CallContext, event: &CallEvent) -> Result<ActionResponse> {
        let legs = bridged_legs(event.participants())?;

        info!("SEND {} Enabling VoiceFocus DTMF toggle support for both participants", ctx);
        Ok(ActionResponse::new(
            legs.iter()
                .map(|leg| Action::receive_digits(&leg.call_id))
                .collect(),
        ))
    }
}

impl EventHandler for ActionSuccessfulHandler {
    fn handle(
        &self,
        ctx: &CallContext,
        phase: CallPhase,
        event: &CallEvent,
    ) -> Result<ActionResponse> {
        match phase {
            CallPhase::Bridging => Self::bridge(ctx, event),
            CallPhase::BridgeEstablished => Self::enable_voice_focus(ctx, event),
            CallPhase::FeatureEnabling => Self::enable_dtmf_control(ctx, event),
            _ => {
                debug!("NONE {} Nothing to do in phase {}", ctx, phase.as_str());
                Ok(ActionResponse::empty())
            }
        }
    }
}

/// Lets either leg toggle noise suppression from the keypad
pub struct DigitsReceivedHandler {
    menu: ControlMenu,
}

impl DigitsReceivedHandler {
    pub fn new(menu: ControlMenu) -> Self {
        Self { menu }
    }
}

impl Default for DigitsReceivedHandler {
    fn default() -> Self {
        Self::new(ControlMenu::voice_focus())
    }
}

impl EventHandler for DigitsReceivedHandler {
    fn handle(
        &self,
        ctx: &CallContext,
        _phase: CallPhase,
        event: &CallEvent,
    ) -> Result<ActionResponse> {
        let digits = event.received_digits()?;
        let reporting = event.reporting_call_id().unwrap_or(&ctx.call_id);

        let item = DtmfDigit::from_received(digits).and_then(|digit| self.menu.get_item(digit));
        let Some(item) = item else {
            let bound: String = self.menu.get_available_digits().into_iter().collect();
            warn!("NONE {} No control bound to digits '{}' (bound: {})", ctx, digits, bound);
            return Ok(ActionResponse::empty());
        };

        match item.action {
            ControlAction::SetVoiceFocus { target, enable } => {
                let call_id = match target {
                    LegTarget::Own => reporting.clone(),
                    LegTarget::Other => other_leg(reporting, event.participants())?.call_id.clone(),
                };
                info!(
                    "SEND {} {}: setting VoiceFocus enabled to {} for {}",
                    ctx, item.label, enable, call_id
                );
                Ok(Action::voice_focus(&call_id, enable).into())
            }
        }
    }
}

/// Tears down whichever leg is still connected
pub struct HangupHandler;

impl EventHandler for HangupHandler {
    fn handle(
        &self,
        ctx: &CallContext,
        _phase: CallPhase,
        event: &CallEvent,
    ) -> Result<ActionResponse> {
        match event.participants().iter().find(|leg| leg.is_connected()) {
            Some(leg) => {
                info!("SEND {} Sending HANGUP action to Call-ID {}", ctx, leg.call_id);
                Ok(Action::hangup(&leg.call_id).into())
            }
            None => {
                info!("NONE {} All calls have been hungup", ctx);
                Ok(ActionResponse::empty())
            }
        }
    }
}
