use crate::app::AppCommand;
use crate::cli::CliError;
use crate::overlay::WindowEvent;
use crate::services::media::TransportCommand;

/// Gesture words accepted on stdin by `media-island run`
pub const GESTURES: &[&str] = &[
    "toggle", "hover", "blur", "screen", "play", "next", "prev", "show", "hide", "quit",
];

/// Translate one line of gesture input into an app command.
///
/// Blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns error for an unknown gesture
pub fn parse_gesture(line: &str) -> Result<Option<AppCommand>, CliError> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "toggle" | "click" => AppCommand::Window(WindowEvent::Clicked),
        "hover" => AppCommand::Window(WindowEvent::PointerEntered),
        "blur" | "collapse" => AppCommand::Window(WindowEvent::FocusLost),
        "screen" => AppCommand::Window(WindowEvent::ScreenParametersChanged),
        "play" | "pause" => AppCommand::Transport(TransportCommand::PlayPause),
        "next" => AppCommand::Transport(TransportCommand::NextTrack),
        "prev" | "previous" => AppCommand::Transport(TransportCommand::PreviousTrack),
        "show" => AppCommand::Show,
        "hide" => AppCommand::Hide,
        "quit" | "exit" => AppCommand::Quit,
        other => {
            return Err(CliError::InvalidArguments(format!(
                "unknown gesture '{other}', expected one of: {}",
                GESTURES.join(", ")
            )));
        }
    };

    Ok(Some(command))
}
