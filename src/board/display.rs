use std::fmt;

use shakmaty::{Color, File, Position, Rank, Square};

use super::ChessPosition;

impl ChessPosition {
    /// The ASCII board as seen from `perspective`'s side.
    pub fn render(&self, perspective: Color) -> String {
        let mut rendered = String::with_capacity(256);
        // writing into a String cannot fail
        let _ = self.write_board(&mut rendered, perspective);
        rendered
    }

    /// Moves played so far, numbered by full move: `1. e2e4 e7e5 2. g1f3`.
    /// A history that starts with Black to move opens with `1...`.
    pub fn move_list(&self) -> String {
        let mut list = String::new();
        for (index, record) in self.history.iter().enumerate() {
            let number = record.position.fullmoves().get();
            let separator = if index == 0 { "" } else { " " };
            match record.position.turn() {
                Color::White => list.push_str(&format!("{}{}. ", separator, number)),
                Color::Black if index == 0 => list.push_str(&format!("{}... ", number)),
                Color::Black => list.push_str(separator),
            }
            list.push_str(&record.chess_move.to_string());
        }
        list
    }

    fn write_board<W: fmt::Write>(&self, out: &mut W, perspective: Color) -> fmt::Result {
        let (ranks, files): (Vec<u32>, Vec<u32>) = match perspective {
            Color::White => ((0..8).rev().collect(), (0..8).collect()),
            Color::Black => ((0..8).collect(), (0..8).rev().collect()),
        };
        let file_labels: String = files
            .iter()
            .map(|&file| format!(" {}", File::new(file).char()))
            .collect();

        writeln!(out, "   {}", file_labels)?;
        writeln!(out, "  +-----------------+")?;
        for &rank in &ranks {
            write!(out, "{} |", rank + 1)?;
            for &file in &files {
                let square = Square::from_coords(File::new(file), Rank::new(rank));
                let symbol = match self.piece_at(square) {
                    Some(piece) => piece.char(),
                    None => '.',
                };
                write!(out, " {}", symbol)?;
            }
            writeln!(out, " | {}", rank + 1)?;
        }
        writeln!(out, "  +-----------------+")?;
        write!(out, "   {}", file_labels)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_board(f, Color::White)
    }
}
