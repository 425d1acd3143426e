//! Map parsing functionality for converting raw text layouts into tile grids.

use glam::UVec2;
use thiserror::Error;

use crate::map::{Tile, TileGrid};

/// Error type for map parsing operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in layout: {0}")]
    UnknownCharacter(char),
    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Layout is empty")]
    Empty,
    #[error("Layout has no player start ('P')")]
    MissingStart,
}

/// Represents the parsed data from a raw layout.
#[derive(Debug)]
pub struct ParsedMap {
    pub grid: TileGrid,
    /// The tile marked `P`.
    pub player_start: UVec2,
}

/// Parser for converting raw layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    pub fn parse_character(c: char) -> Result<Tile, ParseError> {
        match c {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Floor),
            'P' => Ok(Tile::Floor), // Player start, treated as floor
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a rectangular layout, one string per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, contains unknown characters, has rows of
    /// different lengths, or does not mark a player start.
    pub fn parse_layout(raw: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw.first().map(|row| row.chars().count()).ok_or(ParseError::Empty)?;
        if width == 0 {
            return Err(ParseError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * raw.len());
        let mut player_start = None;

        for (y, line) in raw.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                tiles.push(Self::parse_character(character)?);
                if character == 'P' {
                    player_start = Some(UVec2::new(x as u32, y as u32));
                }
            }
        }

        Ok(ParsedMap {
            grid: TileGrid::new(UVec2::new(width as u32, raw.len() as u32), tiles),
            player_start: player_start.ok_or(ParseError::MissingStart)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        assert_eq!(MapTileParser::parse_character('#'), Ok(Tile::Wall));
        assert_eq!(MapTileParser::parse_character('.'), Ok(Tile::Floor));
        assert_eq!(MapTileParser::parse_character('P'), Ok(Tile::Floor));
        assert_eq!(MapTileParser::parse_character('Z'), Err(ParseError::UnknownCharacter('Z')));
    }

    #[test]
    fn test_parse_layout() {
        let parsed = MapTileParser::parse_layout(&["###", "#P.", "###"]).unwrap();
        assert_eq!(parsed.grid.size(), UVec2::new(3, 3));
        assert_eq!(parsed.player_start, UVec2::new(1, 1));
        assert_eq!(parsed.grid.get(UVec2::new(2, 1)), Some(Tile::Floor));
        assert_eq!(parsed.grid.get(UVec2::new(0, 0)), Some(Tile::Wall));
    }

    #[test]
    fn test_parse_layout_errors() {
        assert_eq!(MapTileParser::parse_layout(&[]).unwrap_err(), ParseError::Empty);
        assert_eq!(
            MapTileParser::parse_layout(&["#P#", "##"]).unwrap_err(),
            ParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(MapTileParser::parse_layout(&["#.#"]).unwrap_err(), ParseError::MissingStart);
    }
}
