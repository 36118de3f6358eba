/// The event field of an announce request.
pub mod announce_event;
