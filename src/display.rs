use std::fmt::{self, Debug, Display, Formatter};

use crate::{
    MatrixGraph,
    adjacency_matrix::{AdjacencyMatrix, EdgeWeight},
};

/// Renders the adjacency matrix as a grid of `1`/`0` cells, followed by the
/// vertex stored at each index and, for weighted graphs, the weight of each
/// edge.
impl<T, M> Display for MatrixGraph<T, M>
where
    T: Display,
    M: AdjacencyMatrix,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.size();
        if n == 0 {
            return write!(f, "Graph is empty");
        }

        writeln!(f, "Adjacency Matrix")?;
        writeln!(f, "----------------")?;
        write!(f, "index\t")?;
        for i in 0..n {
            write!(f, "{}", i)?;
            if i < 10 {
                write!(f, " ")?;
            }
        }
        write!(f, "\n\n")?;
        for i in 0..n {
            write!(f, "{}\t", i)?;
            for j in 0..n {
                write!(f, "{} ", u8::from(self.has_edge_at(i, j)))?;
            }
            writeln!(f)?;
        }

        write!(f, "\n\nVertex Values\n-------------\nindex\tvalue\n\n")?;
        for (i, vertex) in self.vertices().enumerate() {
            writeln!(f, "{}\t{}", i, vertex)?;
        }
        writeln!(f)?;

        if <M::Weight as EdgeWeight>::WEIGHTED {
            write!(f, "\n\nWeights of Edges\n----------------\nindex\tweight\n\n")?;
            // Each row lists its higher neighbours from the last index down.
            for i in 0..n {
                for j in (i + 1..n).rev() {
                    if let Some(weight) = self.edge_cost(i, j) {
                        writeln!(f, "{} to {}\t{}", i, j, WeightText(weight))?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Formats an edge weight in plain decimal notation when its magnitude is in
/// `[1e-3, 1e7)`, and as `<mantissa>E<exponent>` otherwise.  The mantissa
/// always has a fractional part, so `1e7` is written `1.0E7`.
struct WeightText(f64);

impl Display for WeightText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let weight = self.0;
        let magnitude = weight.abs();
        if !weight.is_finite() || weight == 0.0 || (1e-3..1e7).contains(&magnitude) {
            return write!(f, "{:?}", weight);
        }
        let scientific = format!("{:e}", weight);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                write!(f, "{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => write!(f, "{}.0E{}", mantissa, exponent),
            None => f.write_str(&scientific),
        }
    }
}

struct EdgeTag<'a, T>(&'a T, &'a T);

impl<'a, T: Debug> Debug for EdgeTag<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -- {:?}", self.0, self.1)
    }
}

struct EdgeList<'a, T, M>(&'a MatrixGraph<T, M>);

impl<'a, T, M> Debug for EdgeList<'a, T, M>
where
    T: Debug,
    M: AdjacencyMatrix,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .edges()
                    .map(|(v1, v2, weight)| (EdgeTag(v1, v2), weight)),
            )
            .finish()
    }
}

impl<T, M> Debug for MatrixGraph<T, M>
where
    T: Debug,
    M: AdjacencyMatrix,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixGraph")
            .field("vertices", &self.vertices.as_slice())
            .field("edges", &EdgeList(self))
            .finish()
    }
}
