//! The seams to the outside world. Finding out which model a light is, and delivering a payload to
//! it, both depend on the transport in use, so they are traits here and the crate only composes
//! them: resolve the model, build the command for it, and hand the rendered payload to a sink.

use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use command::{ColorRequest, LightCommand, LightCommandBuilder, Payload};
use config::BuilderConfig;
use error::ColorError;

/// Finds the model identifier of a light from whatever handle the caller uses for it.
pub trait ModelResolver {
    /// Returns the model identifier, or `None` if the light is not known.
    fn resolve_model_id(&self, handle: &str) -> Option<String>;
}

impl ModelResolver for HashMap<String, String> {
    fn resolve_model_id(&self, handle: &str) -> Option<String> {
        self.get(handle).cloned()
    }
}

/// Delivers a rendered payload to a light.
pub trait CommandSink {
    /// The error the transport can fail with.
    type Error;
    /// Sends the payload to the light with the given handle.
    fn accept(&mut self, handle: &str, payload: Payload) -> Result<(), Self::Error>;
}

/// A sink that keeps every payload it is given, in order. Useful for dry runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    sent: Vec<(String, Payload)>,
}

impl RecordingSink {
    /// An empty sink.
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    /// Everything accepted so far, as handle and payload.
    pub fn sent(&self) -> &[(String, Payload)] {
        &self.sent
    }
}

impl CommandSink for RecordingSink {
    type Error = Infallible;

    fn accept(&mut self, handle: &str, payload: Payload) -> Result<(), Infallible> {
        self.sent.push((handle.to_string(), payload));
        Ok(())
    }
}

/// Why a request did not reach a light.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError<E> {
    /// The request itself was invalid. Nothing was sent.
    Color(ColorError),
    /// The sink refused the payload.
    Sink(E),
}

impl<E> From<ColorError> for DispatchError<E> {
    fn from(err: ColorError) -> DispatchError<E> {
        DispatchError::Color(err)
    }
}

impl<E: fmt::Display> fmt::Display for DispatchError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DispatchError::Color(ref err) => write!(f, "could not build command: {}", err),
            DispatchError::Sink(ref err) => write!(f, "could not send command: {}", err),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> Error for DispatchError<E> {}

/// Builds the command for a color request and sends it to one light. Lights the resolver does not
/// know are treated as an unknown model, which means the full-triangle gamut and color temperatures
/// sent as mired. Returns the command that was sent.
///
/// # Example
/// ```
/// # use std::collections::HashMap;
/// # use chromalight::prelude::*;
/// let mut lights = HashMap::new();
/// lights.insert("kitchen".to_string(), "LST001".to_string());
/// let mut sink = RecordingSink::new();
/// let config = BuilderConfig::default();
/// let request = ColorRequest::Kelvin(2700.0);
/// let command = send_request(&lights, &mut sink, "kitchen", &request, Some(10), &config).unwrap();
/// // light strips have no white channel, so the temperature goes out as a chromaticity
/// assert!(command.color_temperature().is_none());
/// assert!(sink.sent()[0].1.contains_key("xy"));
/// ```
pub fn send_request<R, S>(
    resolver: &R,
    sink: &mut S,
    handle: &str,
    request: &ColorRequest,
    transition: Option<u16>,
    config: &BuilderConfig,
) -> Result<LightCommand, DispatchError<S::Error>>
where
    R: ModelResolver + ?Sized,
    S: CommandSink + ?Sized,
{
    let model_id = match resolver.resolve_model_id(handle) {
        Some(model_id) => model_id,
        None => {
            debug!("no model known for light {:?}", handle);
            String::new()
        }
    };
    let mut builder = LightCommandBuilder::with_config(&model_id, config);
    builder.apply(request)?.set_transition_time(transition);
    let command = builder.build();
    info!("sending {} to light {:?}", command.to_json(), handle);
    sink.accept(handle, command.to_payload())
        .map_err(DispatchError::Sink)?;
    Ok(command)
}
