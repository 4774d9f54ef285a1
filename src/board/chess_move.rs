use std::fmt;

use shakmaty::{File, Move, Role, Square};

/// A legal chess move as seen by the search and the session.
///
/// Castling is expressed by the king's origin and destination (`e1g1`), so the
/// same two squares a player types select it. En passant captures report
/// `captured == Some(Role::Pawn)`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ChessMove {
    from: Square,
    to: Square,
    role: Role,
    promotion: Option<Role>,
    captured: Option<Role>,
    inner: Move,
}

impl ChessMove {
    /// Wraps a move produced by the rules engine. Drop moves (`Put`) have no
    /// origin square and are not representable.
    pub(crate) fn from_legal(inner: Move) -> Option<Self> {
        let from = inner.from()?;
        let to = match inner {
            Move::Castle { king, rook } => {
                let file = if rook.file() > king.file() {
                    File::G
                } else {
                    File::C
                };
                Square::from_coords(file, king.rank())
            }
            _ => inner.to(),
        };

        Some(Self {
            from,
            to,
            role: inner.role(),
            promotion: inner.promotion(),
            captured: inner.capture(),
            inner,
        })
    }

    pub fn from_square(&self) -> Square {
        self.from
    }

    pub fn to_square(&self) -> Square {
        self.to
    }

    /// The piece that moves.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn promotion(&self) -> Option<Role> {
        self.promotion
    }

    pub fn captures(&self) -> Option<Role> {
        self.captured
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.inner, Move::Castle { .. })
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.inner, Move::EnPassant { .. })
    }

    pub(crate) fn inner(&self) -> &Move {
        &self.inner
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_move_display() {
        let chess_move = ChessMove::from_legal(Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E4,
            promotion: None,
        })
        .unwrap();

        assert_eq!(chess_move.to_string(), "e2e4");
        assert_eq!(chess_move.role(), Role::Pawn);
        assert_eq!(chess_move.captures(), None);
        assert!(!chess_move.is_castle());
    }

    #[test]
    fn test_promotion_capture_display() {
        let chess_move = ChessMove::from_legal(Move::Normal {
            role: Role::Pawn,
            from: Square::E7,
            capture: Some(Role::Rook),
            to: Square::F8,
            promotion: Some(Role::Knight),
        })
        .unwrap();

        assert_eq!(chess_move.to_string(), "e7f8n");
        assert_eq!(chess_move.captures(), Some(Role::Rook));
        assert_eq!(chess_move.promotion(), Some(Role::Knight));
    }

    #[test]
    fn test_castle_uses_king_destination() {
        let kingside = ChessMove::from_legal(Move::Castle {
            king: Square::E1,
            rook: Square::H1,
        })
        .unwrap();
        let queenside = ChessMove::from_legal(Move::Castle {
            king: Square::E8,
            rook: Square::A8,
        })
        .unwrap();

        assert_eq!(kingside.to_string(), "e1g1");
        assert_eq!(queenside.to_string(), "e8c8");
        assert!(kingside.is_castle());
        assert_eq!(kingside.role(), Role::King);
    }

    #[test]
    fn test_en_passant_captures_a_pawn() {
        let chess_move = ChessMove::from_legal(Move::EnPassant {
            from: Square::E5,
            to: Square::D6,
        })
        .unwrap();

        assert!(chess_move.is_en_passant());
        assert_eq!(chess_move.captures(), Some(Role::Pawn));
        assert_eq!(chess_move.to_string(), "e5d6");
    }

    #[test]
    fn test_drop_moves_are_not_representable() {
        let drop = Move::Put {
            role: Role::Knight,
            to: Square::E4,
        };
        assert_eq!(ChessMove::from_legal(drop), None);
    }
}
