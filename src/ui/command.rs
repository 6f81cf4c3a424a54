use crate::board::BoardCommand;

/// Parsed operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(BoardCommand),
    Quit,
    /// Unrecognized input; show usage.
    Help,
    /// Blank line; counts as interaction, nothing else.
    Empty,
}

pub const USAGE: &str =
    "comandos: a <kiosko> <mesero> | f <kiosko> | c <kiosko> | s <kiosko> | q";

/// Parse one line of operator input.
pub fn parse_input(line: &str) -> Input {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Input::Empty;
    };
    let arg1 = parts.next();
    let arg2 = parts.next();
    match (verb, arg1, arg2) {
        ("a" | "atender", Some(kiosk), Some(staff)) => Input::Command(BoardCommand::Assign {
            kiosk: kiosk.to_string(),
            staff: staff.to_string(),
        }),
        ("f" | "finalizar", Some(kiosk), None) => {
            Input::Command(BoardCommand::Finalize(kiosk.to_string()))
        }
        ("c" | "cancelar", Some(kiosk), None) => {
            Input::Command(BoardCommand::Cancel(kiosk.to_string()))
        }
        ("s" | "solicitar", Some(kiosk), None) => {
            Input::Command(BoardCommand::Request(kiosk.to_string()))
        }
        ("q" | "quit" | "salir", None, None) => Input::Quit,
        _ => Input::Help,
    }
}
