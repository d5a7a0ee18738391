use super::square::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 board representation (rank 0 = rank 1, file 0 = a-file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting array
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_rank();
            let pawns = (home as i8 + color.pawn_step()) as u8;
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.cells[home as usize][file] = Some(Piece::new(*kind, color));
                board.cells[pawns as usize][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Get piece at a specific square
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.rank() as usize][square.file() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Put a piece on a square, returning whatever stood there
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.rank() as usize][square.file() as usize].replace(piece)
    }

    /// Empty a square, returning whatever stood there
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.rank() as usize][square.file() as usize].take()
    }

    /// Every occupied square with its piece, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64u8).filter_map(move |index| {
            let square = Square(index);
            self.get(square).map(|piece| (square, piece))
        })
    }

    /// Find the king of the specified color
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    /// Display the current position (for debugging)
    pub fn display_board(&self) -> String {
        let mut result = String::new();
        result.push_str("  a b c d e f g h\n");

        for rank in (0..8).rev() {
            result.push_str(&format!("{} ", rank + 1));
            for file in 0..8 {
                let symbol = self.cells[rank][file]
                    .map(Piece::to_fen_char)
                    .unwrap_or('.');
                result.push(symbol);
                result.push(' ');
            }
            result.push_str(&format!(" {}\n", rank + 1));
        }
        result.push_str("  a b c d e f g h\n");
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
