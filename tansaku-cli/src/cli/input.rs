//! Parser for plain-text graph descriptions.
//!
//! One directive per line; `#` starts a comment and blank lines are ignored.
//!
//! ```text
//! # either declare a vertex count...
//! vertices 4
//! # ...or one `point <x> <y>` line per vertex
//! edge 0 1 2.5
//! # weight defaults to the Euclidean distance when points were declared
//! edge 1 2
//! ```

use std::{
    num::{ParseFloatError, ParseIntError},
    str::{FromStr, SplitWhitespace},
};

use tansaku_core::{Edge, Graph, GraphError, GraphErrorCode, Point};
use thiserror::Error;
use tracing::{Span, field, instrument};

/// Errors raised while reading a graph description.
///
/// Line numbers are one-based.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// The first word of a line is not a known directive.
    #[error("line {line}: unknown directive `{directive}`")]
    UnknownDirective {
        /// Offending line.
        line: usize,
        /// The unrecognised word.
        directive: String,
    },
    /// A directive is missing one of its arguments.
    #[error("line {line}: `{directive}` is missing its {argument}")]
    MissingArgument {
        /// Offending line.
        line: usize,
        /// Directive being parsed.
        directive: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// A directive carries more arguments than it accepts.
    #[error("line {line}: unexpected trailing argument `{extra}`")]
    TrailingArgument {
        /// Offending line.
        line: usize,
        /// First unexpected word.
        extra: String,
    },
    /// An argument that must be a non-negative integer is not one.
    #[error("line {line}: `{value}` is not a valid {argument}: {source}")]
    InvalidInteger {
        /// Offending line.
        line: usize,
        /// Name of the argument.
        argument: &'static str,
        /// Raw text.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },
    /// An argument that must be a number is not one.
    #[error("line {line}: `{value}` is not a valid {argument}: {source}")]
    InvalidNumber {
        /// Offending line.
        line: usize,
        /// Name of the argument.
        argument: &'static str,
        /// Raw text.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// `vertices` appeared more than once.
    #[error("line {line}: vertex count already declared")]
    DuplicateVertexCount {
        /// Offending line.
        line: usize,
    },
    /// `vertices` and `point` were both used.
    #[error("line {line}: `vertices` and `point` declarations cannot be mixed")]
    MixedVertexDeclarations {
        /// Offending line.
        line: usize,
    },
    /// An edge omitted its weight but no points were declared.
    #[error("line {line}: edge weight is required unless vertices are declared as points")]
    MissingWeight {
        /// Offending line.
        line: usize,
    },
    /// The description declared no vertices.
    #[error("graph description declares no vertices")]
    NoVertices,
    /// The declared vertex count cannot be allocated.
    #[error("cannot allocate {count} vertices: {source}")]
    TooManyVertices {
        /// Declared vertex count.
        count: usize,
        /// Allocation failure.
        #[source]
        source: GraphError,
    },
    /// The graph rejected an edge.
    #[error("line {line}: {source}")]
    Edge {
        /// Offending line.
        line: usize,
        /// Rejection reason.
        #[source]
        source: GraphError,
    },
}

impl InputError {
    /// Returns the graph error code when building the graph failed.
    #[must_use]
    pub fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Edge { source, .. } | Self::TooManyVertices { source, .. } => {
                Some(source.code())
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Vertices {
    Undeclared,
    Count { count: usize },
    Points { points: Vec<Point> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeLine {
    line: usize,
    source: usize,
    destination: usize,
    weight: Option<f64>,
}

/// A parsed graph description, ready to build into a [`Graph`].
///
/// # Examples
/// ```
/// use tansaku_cli::cli::GraphInput;
///
/// let input = GraphInput::parse("point 0 0\npoint 3 4\nedge 0 1\n")?;
/// assert_eq!(input.vertex_count(), 2);
///
/// let graph = input.build()?;
/// assert_eq!(graph.weight(0, 1), Some(5.0));
/// # Ok::<(), tansaku_cli::cli::InputError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphInput {
    vertices: Vertices,
    edges: Vec<EdgeLine>,
}

impl GraphInput {
    /// Parses a graph description.
    ///
    /// # Errors
    /// Returns [`InputError`] naming the first malformed line, or
    /// [`InputError::NoVertices`] when nothing declares a vertex.
    #[instrument(
        name = "cli.parse_input",
        err,
        skip(text),
        fields(lines = field::Empty, vertices = field::Empty, edges = field::Empty),
    )]
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut input = Self {
            vertices: Vertices::Undeclared,
            edges: Vec::new(),
        };
        let mut line_count = 0;

        for (index, raw) in text.lines().enumerate() {
            line_count = index + 1;
            let content = raw.split_once('#').map_or(raw, |(before, _)| before);
            let mut words = Words {
                line: line_count,
                inner: content.split_whitespace(),
            };
            let Some(directive) = words.inner.next() else {
                continue;
            };
            match directive {
                "vertices" => input.declare_count(&mut words)?,
                "point" => input.declare_point(&mut words)?,
                "edge" => input.declare_edge(&mut words)?,
                other => {
                    return Err(InputError::UnknownDirective {
                        line: line_count,
                        directive: other.to_owned(),
                    });
                }
            }
            words.finish()?;
        }

        if input.vertices == Vertices::Undeclared {
            return Err(InputError::NoVertices);
        }

        let span = Span::current();
        span.record("lines", line_count);
        span.record("vertices", input.vertex_count());
        span.record("edges", input.edges.len());
        Ok(input)
    }

    /// Returns the number of declared vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match &self.vertices {
            Vertices::Undeclared => 0,
            Vertices::Count { count } => *count,
            Vertices::Points { points } => points.len(),
        }
    }

    /// Returns the number of declared edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the described graph.
    ///
    /// # Errors
    /// Returns [`InputError::MissingWeight`] for unweighted edges without
    /// points, [`InputError::TooManyVertices`] when the declared count cannot
    /// be allocated, and [`InputError::Edge`] when the graph rejects an edge.
    pub fn build(&self) -> Result<Graph, InputError> {
        let count = self.vertex_count();
        let mut graph = Graph::try_with_vertices(count)
            .map_err(|source| InputError::TooManyVertices { count, source })?;
        for pending in &self.edges {
            let edge = self.resolve(pending)?;
            graph.add_edge(edge).map_err(|source| InputError::Edge {
                line: pending.line,
                source,
            })?;
        }
        Ok(graph)
    }

    fn resolve(&self, pending: &EdgeLine) -> Result<Edge, InputError> {
        if let Some(weight) = pending.weight {
            return Ok(Edge::new(pending.source, pending.destination, weight));
        }
        let Vertices::Points { points } = &self.vertices else {
            return Err(InputError::MissingWeight { line: pending.line });
        };
        let point = |id: usize| {
            points.get(id).ok_or(InputError::Edge {
                line: pending.line,
                source: GraphError::VertexNotFound {
                    id,
                    vertex_count: points.len(),
                },
            })
        };
        Ok(Edge::between_points(
            pending.source,
            point(pending.source)?,
            pending.destination,
            point(pending.destination)?,
        ))
    }

    fn declare_count(&mut self, words: &mut Words<'_>) -> Result<(), InputError> {
        let line = words.line;
        match self.vertices {
            Vertices::Undeclared => {}
            Vertices::Count { .. } => return Err(InputError::DuplicateVertexCount { line }),
            Vertices::Points { .. } => return Err(InputError::MixedVertexDeclarations { line }),
        }
        let count = words.integer("vertices", "count")?;
        self.vertices = Vertices::Count { count };
        Ok(())
    }

    fn declare_point(&mut self, words: &mut Words<'_>) -> Result<(), InputError> {
        let x = words.number("point", "x coordinate")?;
        let y = words.number("point", "y coordinate")?;
        let point = Point::new(x, y);
        match &mut self.vertices {
            Vertices::Count { .. } => {
                return Err(InputError::MixedVertexDeclarations { line: words.line });
            }
            Vertices::Points { points } => {
                points.push(point);
                return Ok(());
            }
            Vertices::Undeclared => {}
        }
        self.vertices = Vertices::Points {
            points: vec![point],
        };
        Ok(())
    }

    fn declare_edge(&mut self, words: &mut Words<'_>) -> Result<(), InputError> {
        let source = words.integer("edge", "source vertex")?;
        let destination = words.integer("edge", "destination vertex")?;
        let weight = words.optional_number("weight")?;
        self.edges.push(EdgeLine {
            line: words.line,
            source,
            destination,
            weight,
        });
        Ok(())
    }
}

/// Remaining words of one line.
struct Words<'a> {
    line: usize,
    inner: SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    fn required(
        &mut self,
        directive: &'static str,
        argument: &'static str,
    ) -> Result<&'a str, InputError> {
        self.inner.next().ok_or(InputError::MissingArgument {
            line: self.line,
            directive,
            argument,
        })
    }

    fn integer(
        &mut self,
        directive: &'static str,
        argument: &'static str,
    ) -> Result<usize, InputError> {
        let line = self.line;
        let raw = self.required(directive, argument)?;
        parse_word(raw).map_err(|source| InputError::InvalidInteger {
            line,
            argument,
            value: raw.to_owned(),
            source,
        })
    }

    fn number(
        &mut self,
        directive: &'static str,
        argument: &'static str,
    ) -> Result<f64, InputError> {
        let line = self.line;
        let raw = self.required(directive, argument)?;
        float_word(line, argument, raw)
    }

    fn optional_number(&mut self, argument: &'static str) -> Result<Option<f64>, InputError> {
        let line = self.line;
        self.inner
            .next()
            .map(|raw| float_word(line, argument, raw))
            .transpose()
    }

    fn finish(mut self) -> Result<(), InputError> {
        match self.inner.next() {
            Some(extra) => Err(InputError::TrailingArgument {
                line: self.line,
                extra: extra.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

fn parse_word<T: FromStr>(raw: &str) -> Result<T, T::Err> {
    raw.parse()
}

fn float_word(line: usize, argument: &'static str, raw: &str) -> Result<f64, InputError> {
    parse_word(raw).map_err(|source| InputError::InvalidNumber {
        line,
        argument,
        value: raw.to_owned(),
        source,
    })
}
