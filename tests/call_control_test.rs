//! Call flow integration tests

use serde_json::{json, Value};
use voicefocus_pstn::application::CallController;
use voicefocus_pstn::domain::action::AudioAssets;
use fancy_regex::Regex;
use voicefocus_pstn::domain::shared::value_objects::DialPlan;

fn controller() -> CallController {
    CallController::new(AudioAssets::new("fake-bucket"))
}

fn respond(event: Value) -> Value {
    serde_json::to_value(controller().handle(&event)).unwrap()
}

fn assert_schema_10(resp: &Value) {
    assert_eq!(resp["SchemaVersion"], "1.0");
    assert!(resp["Actions"].is_array());
}

fn bridged_participants() -> Value {
    json!([
        { "CallId": "leg-a", "To": "+12125551212", "From": "+12035551212", "Status": "Connected" },
        { "CallId": "leg-b", "To": "+13105551212", "From": "+12125551212", "Status": "Connected" }
    ])
}

#[test]
fn test_empty_event() {
    let resp = respond(json!({}));
    assert_schema_10(&resp);
    assert_eq!(resp["Actions"], json!([]));
}

#[test]
fn test_unknown_event_type_is_schema_valid() {
    for kind in [json!("SOMETHING_NEW"), json!(42), Value::Null] {
        let resp = respond(json!({ "InvocationEventType": kind }));
        assert_schema_10(&resp);
    }
}

#[test]
fn test_new_inbound_call() {
    let resp = respond(json!({
        "InvocationEventType": "NEW_INBOUND_CALL",
        "CallDetails": {
            "Participants": [{
                "CallId": "xxx-call-id-xxx",
                "To": "+12125551212",
                "From": "+12035551212"
            }]
        }
    }));

    assert_schema_10(&resp);
    let actions = resp["Actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["Type"], "Pause");
    assert_eq!(actions[0]["Parameters"]["DurationInMilliseconds"], "3000");
    assert_eq!(actions[1]["Type"], "PlayAudioAndGetDigits");

    let params = &actions[1]["Parameters"];
    assert_eq!(params["CallId"], "xxx-call-id-xxx");
    assert_eq!(params["InputDigitsRegex"], DialPlan::PATTERN);
    assert_eq!(params["AudioSource"]["BucketName"], "fake-bucket");
    assert_eq!(params["AudioSource"]["Key"], "welcome_vf_demo.wav");
    assert_eq!(params["FailureAudioSource"]["Key"], "invalid_entry.wav");
    assert_eq!(params["MinNumberOfDigits"], 11);
    assert_eq!(params["MaxNumberOfDigits"], 11);
    assert_eq!(params["TerminatorDigits"], json!(["#"]));
    assert_eq!(params["Repeat"], 2);
}

#[test]
fn test_destination_dial_plan() {
    let resp = respond(json!({
        "InvocationEventType": "NEW_INBOUND_CALL",
        "CallDetails": { "Participants": [{ "CallId": "leg-a", "To": "+12125551212", "From": "+12035551212" }] }
    }));
    let sent = resp["Actions"][1]["Parameters"]["InputDigitsRegex"].as_str().unwrap();
    let dial_plan = Regex::new(sent).unwrap();

    for digits in ["12125551212", "18005551212", "19015551212"] {
        assert!(dial_plan.is_match(digits).unwrap(), "{} should be dialable", digits);
    }
    for digits in ["19005551212", "2125551212", "22125551212", "121255512123", "1212555121#"] {
        assert!(!dial_plan.is_match(digits).unwrap(), "{} should be rejected", digits);
    }
}

#[test]
fn test_ringing_is_acknowledged() {
    let resp = respond(json!({
        "InvocationEventType": "RINGING",
        "CallDetails": { "Participants": [{ "CallId": "leg-a" }] }
    }));
    assert_schema_10(&resp);
    assert_eq!(resp["Actions"], json!([]));
}

#[test]
fn test_digits_collected_bridges_call() {
    let resp = respond(json!({
        "InvocationEventType": "ACTION_SUCCESSFUL",
        "ActionData": {
            "Type": "PlayAudioAndGetDigits",
            "ReceivedDigits": "2125551212"
        },
        "CallDetails": {
            "Participants": [{ "CallId": "leg-a", "To": "+18005550100", "From": "+12035551212", "Status": "Connected" }]
        }
    }));

    let actions = resp["Actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["Type"], "CallAndBridge");
    assert_eq!(actions[0]["Parameters"]["CallerIdNumber"], "+18005550100");
    assert_eq!(actions[0]["Parameters"]["CallTimeoutSeconds"], 30);
    assert_eq!(
        actions[0]["Parameters"]["Endpoints"],
        json!([{ "Uri": "+2125551212", "BridgeEndpointType": "PSTN" }])
    );
}

#[test]
fn test_bridge_enables_voice_focus_on_both_legs() {
    let resp = respond(json!({
        "InvocationEventType": "ACTION_SUCCESSFUL",
        "ActionData": { "Type": "CallAndBridge" },
        "CallDetails": { "Participants": bridged_participants() }
    }));

    assert_eq!(
        resp["Actions"],
        json!([
            { "Type": "VoiceFocus", "Parameters": { "Enable": true, "CallId": "leg-a" } },
            { "Type": "VoiceFocus", "Parameters": { "Enable": true, "CallId": "leg-b" } }
        ])
    );
}

#[test]
fn test_voice_focus_enables_dtmf_on_both_legs() {
    let resp = respond(json!({
        "InvocationEventType": "ACTION_SUCCESSFUL",
        "ActionData": { "Type": "VoiceFocus" },
        "CallDetails": { "Participants": bridged_participants() }
    }));

    let actions = resp["Actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert!(actions.iter().all(|a| a["Type"] == "ReceiveDigits"));
    assert_eq!(actions[0]["Parameters"]["CallId"], "leg-a");
    assert_eq!(actions[1]["Parameters"]["CallId"], "leg-b");
    assert_eq!(actions[0]["Parameters"]["InputDigitsRegex"], "[0-1]$");
}

#[test]
fn test_digit_eight_disables_other_leg() {
    let resp = respond(json!({
        "InvocationEventType": "DIGITS_RECEIVED",
        "ActionData": {
            "Type": "ReceiveDigits",
            "Parameters": { "CallId": "leg-a" },
            "ReceivedDigits": "8"
        },
        "CallDetails": { "Participants": bridged_participants() }
    }));

    assert_eq!(
        resp["Actions"],
        json!([{ "Type": "VoiceFocus", "Parameters": { "Enable": false, "CallId": "leg-b" } }])
    );
}

#[test]
fn test_unbound_digit_keeps_call_up() {
    let resp = respond(json!({
        "InvocationEventType": "DIGITS_RECEIVED",
        "ActionData": { "Type": "ReceiveDigits", "ReceivedDigits": "5" },
        "CallDetails": { "Participants": bridged_participants() }
    }));
    assert_schema_10(&resp);
    assert_eq!(resp["Actions"], json!([]));
}

#[test]
fn test_hangup_tears_down_connected_leg() {
    let resp = respond(json!({
        "InvocationEventType": "HANGUP",
        "CallDetails": { "Participants": [
            { "CallId": "leg-a", "Status": "Disconnected" },
            { "CallId": "leg-b", "Status": "Connected" }
        ] }
    }));
    assert_eq!(
        resp["Actions"],
        json!([{ "Type": "Hangup", "Parameters": { "CallId": "leg-b", "SipResponseCode": "0" } }])
    );

    let resp = respond(json!({
        "InvocationEventType": "HANGUP",
        "CallDetails": { "Participants": [
            { "CallId": "leg-a", "Status": "Disconnected" },
            { "CallId": "leg-b", "Status": "Disconnected" }
        ] }
    }));
    assert_eq!(resp["Actions"], json!([]));
}

#[test]
fn test_action_failed_plays_error_and_hangs_up() {
    let resp = respond(json!({
        "InvocationEventType": "ACTION_FAILED",
        "ActionData": {
            "Type": "CallAndBridge",
            "ErrorType": "CallNotAnswered",
            "ErrorMessage": "Call was not answered"
        },
        "CallDetails": { "Participants": [{ "CallId": "leg-a", "Status": "Connected" }] }
    }));

    assert_eq!(
        resp["Actions"],
        json!([
            {
                "Type": "PlayAudio",
                "Parameters": {
                    "CallId": "leg-a",
                    "AudioSource": { "Type": "S3", "BucketName": "fake-bucket", "Key": "unable_to_connect_your_call.wav" }
                }
            },
            { "Type": "Hangup", "Parameters": { "CallId": "leg-a", "SipResponseCode": "0" } }
        ])
    );
}

#[test]
fn test_digits_collected_without_caller_id_hangs_up() {
    let resp = respond(json!({
        "InvocationEventType": "ACTION_SUCCESSFUL",
        "ActionData": {
            "Type": "PlayAudioAndGetDigits",
            "ReceivedDigits": "12125551212"
        },
        "CallDetails": {
            "Participants": [{ "CallId": "leg-a", "From": "+12035551212", "Status": "Connected" }]
        }
    }));

    let actions = resp["Actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["Type"], "PlayAudio");
    assert_eq!(actions[0]["Parameters"]["AudioSource"]["Key"], "unable_to_connect_your_call.wav");
    assert_eq!(actions[1]["Type"], "Hangup");
    assert_eq!(actions[1]["Parameters"]["CallId"], "leg-a");
}

#[test]
fn test_missing_call_details_never_fails() {
    for kind in ["NEW_INBOUND_CALL", "ACTION_SUCCESSFUL", "DIGITS_RECEIVED", "HANGUP"] {
        let resp = respond(json!({ "InvocationEventType": kind }));
        assert_schema_10(&resp);
        assert_eq!(resp["Actions"], json!([]), "{}", kind);
    }
}

#[test]
fn test_missing_action_data_hangs_up_known_call() {
    let resp = respond(json!({
        "InvocationEventType": "DIGITS_RECEIVED",
        "CallDetails": { "Participants": bridged_participants() }
    }));
    let actions = resp["Actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["Type"], "PlayAudio");
    assert_eq!(actions[1]["Type"], "Hangup");
    assert_eq!(actions[1]["Parameters"]["CallId"], "leg-a");
}
