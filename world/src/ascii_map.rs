use glam::{ivec2, IVec2};

/// Text tile map, one char per cell.
///
/// Leading blank lines and indentation common to every line are stripped,
/// so maps can be written indented inside config files and string literals.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct AsciiMap {
    map: String,
}

impl AsciiMap {
    pub fn new(map: &str) -> Self {
        let map = map.trim_end();

        let lines: Vec<&str> = map
            .lines()
            .map(|line| line.trim_end())
            .skip_while(|line| line.is_empty())
            .collect();

        let x_skip = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        let mut trimmed = String::new();
        for line in lines {
            trimmed.extend(line.chars().skip(x_skip));
            trimmed.push('\n');
        }

        AsciiMap { map: trimmed }
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.map.lines().count() as i32
    }

    /// Length of the longest row.
    pub fn width(&self) -> i32 {
        self.map
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as i32
    }

    /// Iterate the non-whitespace chars on the map with their `(column,
    /// row)` positions. Rows count downwards from the top line.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, char)> + '_ {
        self.map.lines().enumerate().flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .map(move |(x, c)| (ivec2(x as i32, y as i32), c))
        })
    }

    /// Convert a `(column, row)` map position to a world cell position
    /// where y grows upwards and the bottom row is at y = 0.
    pub fn to_world(&self, pos: IVec2) -> IVec2 {
        ivec2(pos.x, self.height() - 1 - pos.y)
    }

    /// Inverse of `to_world`.
    pub fn from_world(&self, cell: IVec2) -> IVec2 {
        ivec2(cell.x, self.height() - 1 - cell.y)
    }

    /// Position of the first occurrence of `c`.
    pub fn find(&self, c: char) -> Option<IVec2> {
        self.iter().find_map(|(p, a)| (a == c).then_some(p))
    }
}

impl std::fmt::Display for AsciiMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.map)
    }
}
