//! Line input parsing.

use strictly_checkers::{BOARD_SIZE, Cell, Command, Move};

/// Help text listing every input line.
pub const HELP: &str = "\
Commands:
  select R C          select your piece at row R, column C
  move R1 C1 R2 C2    propose a move
  R C                 same as select (or pick a destination once selected)
  t | f               choose True or False
  submit              submit the chosen answer
  skip                skip the challenge (-1 point)
  hint                show a hint for the current challenge
  board               redraw the board
  new                 start a new game
  help                show this text
  quit                leave";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward to the game session.
    Game(Command),
    /// Show the hint for the open challenge.
    Hint,
    /// Redraw the board.
    Board,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Unrecognised command word.
    #[display("Unknown command '{}'. Type 'help' for commands.", _0)]
    Unknown(String),

    /// Wrong number of coordinates.
    #[display("'{}' needs {} coordinates", _0, _1)]
    Arity(&'static str, usize),

    /// A coordinate that is not a number on the board.
    #[display("'{}' is not a row or column (0-7)", _0)]
    Coordinate(String),
}

impl std::error::Error for ParseError {}

/// Parses one input line.
pub fn parse(line: &str) -> Result<Input, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Ok(Input::Empty);
    };

    let input = match head.to_ascii_lowercase().as_str() {
        "select" | "s" => Input::Game(Command::Click(cell(rest, "select")?)),
        "move" | "m" => {
            let [r1, c1, r2, c2] = rest else {
                return Err(ParseError::Arity("move", 4));
            };
            let from = Cell::new(coordinate(r1)?, coordinate(c1)?);
            let to = Cell::new(coordinate(r2)?, coordinate(c2)?);
            Input::Game(Command::AttemptMove(Move::new(from, to)))
        }
        "t" | "true" => Input::Game(Command::ChooseAnswer(true)),
        "f" | "false" => Input::Game(Command::ChooseAnswer(false)),
        "submit" => Input::Game(Command::Submit),
        "skip" => Input::Game(Command::Skip),
        "new" => Input::Game(Command::NewGame),
        "hint" | "h" => Input::Hint,
        "board" | "b" => Input::Board,
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ if head.parse::<u8>().is_ok() => Input::Game(Command::Click(cell(&words, "R C")?)),
        _ => return Err(ParseError::Unknown(head.to_string())),
    };
    Ok(input)
}

fn cell(args: &[&str], name: &'static str) -> Result<Cell, ParseError> {
    let [row, col] = args else {
        return Err(ParseError::Arity(name, 2));
    };
    Ok(Cell::new(coordinate(row)?, coordinate(col)?))
}

fn coordinate(text: &str) -> Result<u8, ParseError> {
    text.parse::<u8>()
        .ok()
        .filter(|n| *n < BOARD_SIZE)
        .ok_or_else(|| ParseError::Coordinate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_bare_coordinates() {
        let expected = Input::Game(Command::Click(Cell::new(5, 2)));
        assert_eq!(parse("select 5 2"), Ok(expected));
        assert_eq!(parse("  5 2 "), Ok(expected));
        assert_eq!(parse("S 5 2"), Ok(expected));
    }

    #[test]
    fn test_move() {
        assert_eq!(
            parse("move 5 2 4 3"),
            Ok(Input::Game(Command::AttemptMove(Move::new(
                Cell::new(5, 2),
                Cell::new(4, 3)
            ))))
        );
        assert_eq!(parse("move 5 2 4"), Err(ParseError::Arity("move", 4)));
    }

    #[test]
    fn test_answers_and_words() {
        assert_eq!(parse("t"), Ok(Input::Game(Command::ChooseAnswer(true))));
        assert_eq!(parse("FALSE"), Ok(Input::Game(Command::ChooseAnswer(false))));
        assert_eq!(parse("submit"), Ok(Input::Game(Command::Submit)));
        assert_eq!(parse("skip"), Ok(Input::Game(Command::Skip)));
        assert_eq!(parse("new"), Ok(Input::Game(Command::NewGame)));
        assert_eq!(parse("hint"), Ok(Input::Hint));
        assert_eq!(parse("quit"), Ok(Input::Quit));
        assert_eq!(parse(""), Ok(Input::Empty));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(parse("jump"), Err(ParseError::Unknown("jump".to_string())));
        assert_eq!(
            parse("select 8 1"),
            Err(ParseError::Coordinate("8".to_string()))
        );
        assert_eq!(
            parse("select x 1").unwrap_err().to_string(),
            "'x' is not a row or column (0-7)"
        );
    }
}
