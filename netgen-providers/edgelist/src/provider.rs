//! Edge-list ingestion into a [`Graph`].
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, Trim};
use netgen_core::{Graph, NodeId};
use tracing::{debug, info, instrument};

use crate::{errors::EdgeListError, format::EdgeListFormat};

/// Reference network read from an edge list.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph,
    self_loops: usize,
    duplicates: usize,
}

impl EdgeListProvider {
    /// Reads an edge list from `reader`.
    ///
    /// Comma and tab layouts follow CSV quoting rules. Blank lines and lines
    /// starting with the format's comment prefix are ignored. Self-loop records add their node but no edge and are counted.
    /// Repeated edges collapse onto the first occurrence.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MissingColumn`] or
    /// [`EdgeListError::InvalidNode`] for malformed records,
    /// [`EdgeListError::EmptyInput`] when no record was found and
    /// [`EdgeListError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use netgen_providers_edgelist::{EdgeListFormat, EdgeListProvider};
    ///
    /// let input = Cursor::new("from,to\n0,1\n1,2\n");
    /// let provider = EdgeListProvider::try_from_reader(
    ///     "demo",
    ///     input,
    ///     EdgeListFormat::csv_with_header(),
    /// )
    /// .expect("edge list must parse");
    /// assert_eq!(provider.graph().edge_count(), 2);
    /// ```
    #[instrument(name = "provider.edgelist", err, skip(name, reader), fields(name = tracing::field::Empty))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        format: EdgeListFormat,
    ) -> Result<Self, EdgeListError> {
        let name = name.into();
        tracing::Span::current().record("name", name.as_str());

        let mut provider = Self {
            name,
            graph: Graph::new(),
            self_loops: 0,
            duplicates: 0,
        };
        let records = match format.delimiter().byte() {
            Some(delimiter) => provider.read_delimited(reader, delimiter, format)?,
            None => provider.read_whitespace(reader, format)?,
        };

        if records == 0 {
            return Err(EdgeListError::EmptyInput);
        }
        info!(
            records,
            nodes = provider.graph.node_count(),
            edges = provider.graph.edge_count(),
            self_loops = provider.self_loops,
            duplicates = provider.duplicates,
            "edge list loaded"
        );
        Ok(provider)
    }

    /// Opens `path` and reads it with [`Self::try_from_reader`].
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened, plus
    /// every error [`Self::try_from_reader`] reports.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        format: EdgeListFormat,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file), format)
    }

    /// Reads comma or tab separated records through the CSV reader, which
    /// handles quoting, CRLF terminators and the header row.
    fn read_delimited<R: BufRead>(
        &mut self,
        reader: R,
        delimiter: u8,
        format: EdgeListFormat,
    ) -> Result<usize, EdgeListError> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(format.header())
            .comment(format.comment_prefix())
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        if format.header() {
            let header = csv_reader.headers().map_err(EdgeListError::from_csv)?;
            debug!(header = ?header, "skipping header row");
        }

        let mut record = StringRecord::new();
        let mut records = 0_usize;
        while csv_reader
            .read_record(&mut record)
            .map_err(EdgeListError::from_csv)?
        {
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record
                .position()
                .map_or(0, |position| line_number(position.line()));
            let (source, target) = parse_columns(line, record.get(0), record.get(1))?;
            self.insert(source, target)?;
            records += 1;
        }
        Ok(records)
    }

    fn read_whitespace<R: BufRead>(
        &mut self,
        reader: R,
        format: EdgeListFormat,
    ) -> Result<usize, EdgeListError> {
        let mut records = 0_usize;
        let mut header_pending = format.header();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let record = line.trim();
            if record.is_empty() || format.is_comment(record) {
                continue;
            }
            if header_pending {
                header_pending = false;
                debug!(header = record, "skipping header row");
                continue;
            }
            let mut fields = record.split_whitespace();
            let (source, target) = parse_columns(index + 1, fields.next(), fields.next())?;
            self.insert(source, target)?;
            records += 1;
        }
        Ok(records)
    }

    fn insert(&mut self, source: NodeId, target: NodeId) -> Result<(), EdgeListError> {
        self.graph.add_node(source);
        if source == target {
            self.self_loops += 1;
            return Ok(());
        }
        self.graph.add_node(target);
        if !self.graph.add_edge(source, target)? {
            self.duplicates += 1;
        }
        Ok(())
    }

    /// Returns the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the provider and returns the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Number of self-loop records that were skipped.
    #[must_use]
    pub fn skipped_self_loops(&self) -> usize {
        self.self_loops
    }

    /// Number of records repeating an edge already read.
    #[must_use]
    pub fn duplicate_edges(&self) -> usize {
        self.duplicates
    }
}

fn line_number(line: u64) -> usize {
    usize::try_from(line).unwrap_or(usize::MAX)
}

fn parse_columns(
    line: usize,
    source: Option<&str>,
    target: Option<&str>,
) -> Result<(NodeId, NodeId), EdgeListError> {
    let source = source
        .filter(|field| !field.is_empty())
        .ok_or(EdgeListError::MissingColumn {
            line,
            column: "source",
        })?;
    let target = target
        .filter(|field| !field.is_empty())
        .ok_or(EdgeListError::MissingColumn {
            line,
            column: "target",
        })?;
    Ok((parse_node(line, source)?, parse_node(line, target)?))
}

fn parse_node(line: usize, value: &str) -> Result<NodeId, EdgeListError> {
    value.parse().map_err(|_| EdgeListError::InvalidNode {
        line,
        value: value.to_owned(),
    })
}
