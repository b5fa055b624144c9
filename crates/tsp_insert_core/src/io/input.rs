use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{
    Result,
    constants::{EDGE_WEIGHT_TYPE_KEY, GEO_EDGE_WEIGHT, NODE_COORD_SECTION},
    distance::DistanceMode,
    node::{Point, PointSet},
};

/// Parsed TSPLIB-style problem: header fields of interest plus the node coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProblemInput {
    pub name: Option<String>,
    pub dimension: Option<usize>,
    pub mode: DistanceMode,
    pub points: PointSet,
}

impl ProblemInput {
    /// Reads `path`, or stdin when `path` is `None`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        let text = match path {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        Ok(Self::parse(&text))
    }

    /// Scans headers up to `NODE_COORD_SECTION`, then reads `id x y` triples until the
    /// first token that does not parse or the input ends.
    ///
    /// Parsing is permissive: unknown headers are ignored, a missing section yields no
    /// points and an incomplete trailing triple is dropped.
    pub fn parse(text: &str) -> Self {
        let mut input = Self::default();
        let mut lines = text.lines();

        let mut found_section = false;
        for raw_line in lines.by_ref() {
            let line = raw_line.trim();
            if line.eq_ignore_ascii_case(NODE_COORD_SECTION) {
                found_section = true;
                break;
            }
            input.apply_header(line);
        }

        if !found_section {
            log::warn!("input: no {NODE_COORD_SECTION} found");
            return input;
        }

        let mut tokens = lines.flat_map(str::split_whitespace);
        while let Some((id, point)) = next_node(&mut tokens) {
            input.points.push(id, point);
        }

        if let Some(dimension) = input.dimension
            && dimension != input.points.len()
        {
            log::warn!(
                "input: DIMENSION is {dimension}, but {NODE_COORD_SECTION} has {} nodes",
                input.points.len()
            );
        }

        log::info!(
            "input: name={} n={} mode={}",
            input.name.as_deref().unwrap_or("-"),
            input.points.len(),
            input.mode
        );
        input
    }

    fn apply_header(&mut self, line: &str) {
        let Some((key, value)) = line
            .split_once(':')
            .or_else(|| line.split_once('='))
            .map(|(key, value)| (key.trim().to_ascii_uppercase(), value.trim()))
        else {
            return;
        };

        match key.as_str() {
            "NAME" => self.name = Some(value.to_string()),
            "DIMENSION" => match value.parse::<usize>() {
                Ok(dimension) => self.dimension = Some(dimension),
                Err(e) => log::warn!("input: ignoring bad DIMENSION '{value}': {e}"),
            },
            EDGE_WEIGHT_TYPE_KEY => {
                self.mode = if value.eq_ignore_ascii_case(GEO_EDGE_WEIGHT) {
                    DistanceMode::Geographic
                } else {
                    DistanceMode::Euclidean
                };
            }
            _ => {}
        }
    }
}

fn next_node<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<(i64, Point)> {
    let id = tokens.next()?.parse::<i64>().ok()?;
    let x = next_coord(tokens)?;
    let y = next_coord(tokens)?;
    Some((id, Point::new(x, y)))
}

/// `f64::from_str` also accepts `inf` and `NaN`; those end the section like any other
/// non-numeric token.
fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<f64> {
    let token = tokens.next()?;
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::warn!("input: stopping at non-finite coordinate '{token}'");
            None
        }
    }
}
