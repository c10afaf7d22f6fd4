use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, Cell};

/// Draws `board` to stdout, underlining the most recently placed piece
pub fn display<B: Board>(board: &B) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.columns()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    let last_added = board.last_added();
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let mut tile = style("O")
                .attribute(Attribute::Bold)
                .on(Color::DarkBlue)
                .with(match board.state(row, column) {
                    Cell::PlayerOne => Color::Red,
                    Cell::PlayerTwo => Color::Yellow,
                    Cell::Empty => Color::DarkBlue,
                });
            if last_added == Some((row, column)) {
                tile = tile.attribute(Attribute::Underlined);
            }
            stdout.queue(PrintStyledContent(tile))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
