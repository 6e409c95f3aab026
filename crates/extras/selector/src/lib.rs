//! Select elements of a tree with structural selectors.
//!
//! A [`Selector`] is parsed from the familiar CSS syntax and matched against
//! any element tree implementing [`Tree`]. The supported subset is what menus
//! need to find their parts:
//!
//! - type selectors (`nav`) and the universal selector (`*`)
//! - identifiers (`#main`) and classes (`.submenu`)
//! - descendant (`nav li`) and child (`nav > ul`) combinators
//! - selector lists (`ul, ol`)
//!
//! ```
//! use lightmenu_selector::Selector;
//!
//! let selector: Selector = "nav>ul li.submenu".parse().unwrap();
//! assert_eq!(selector.to_string(), "nav > ul li.submenu");
//! ```
mod parser;

use std::fmt;
use std::str::FromStr;

/// An element tree a [`Selector`] can be matched against.
pub trait Tree {
    /// The handle of a node of the tree.
    type Node: Copy;

    /// Returns the parent of `node`, if any.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Returns the type name of `node`, like `li`.
    fn tag(&self, node: Self::Node) -> &str;

    /// Returns the identifier of `node`, if any.
    fn id(&self, node: Self::Node) -> Option<&str>;

    /// Returns whether `node` carries `class`.
    fn has_class(&self, node: Self::Node, class: &str) -> bool;
}

/// An error produced when a selector cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector `{0}`")]
pub struct Error(pub String);

/// A list of complex selectors; matches if any of them matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    complexes: Vec<Complex>,
}

impl Selector {
    /// Parses a [`Selector`].
    pub fn parse(source: &str) -> Result<Self, Error> {
        parser::selector(source)
            .map(|complexes| Self { complexes })
            .map_err(|_| Error(source.to_owned()))
    }

    /// Returns whether `node` of `tree` matches the [`Selector`].
    pub fn matches<T: Tree>(&self, tree: &T, node: T::Node) -> bool {
        self.complexes
            .iter()
            .any(|complex| complex.matches(tree, node, complex.compounds.len() - 1))
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, complex) in self.complexes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{complex}")?;
        }

        Ok(())
    }
}

/// Compounds joined by combinators, like `nav > ul li`.
///
/// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

impl Complex {
    fn matches<T: Tree>(&self, tree: &T, node: T::Node, index: usize) -> bool {
        if !self.compounds[index].matches(tree, node) {
            return false;
        }

        if index == 0 {
            return true;
        }

        match self.combinators[index - 1] {
            Combinator::Child => tree
                .parent(node)
                .is_some_and(|parent| self.matches(tree, parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = tree.parent(node);

                while let Some(current) = ancestor {
                    if self.matches(tree, current, index - 1) {
                        return true;
                    }

                    ancestor = tree.parent(current);
                }

                false
            }
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                match self.combinators[i - 1] {
                    Combinator::Child => f.write_str(" > ")?,
                    Combinator::Descendant => f.write_str(" ")?,
                }
            }

            write!(f, "{compound}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// A type selector followed by identifiers and classes, like `li.submenu`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    simples: Vec<Simple>,
}

impl Compound {
    fn matches<T: Tree>(&self, tree: &T, node: T::Node) -> bool {
        if let Some(tag) = &self.tag
            && !tree.tag(node).eq_ignore_ascii_case(tag)
        {
            return false;
        }

        self.simples.iter().all(|simple| match simple {
            Simple::Id(id) => tree.id(node) == Some(id.as_str()),
            Simple::Class(class) => tree.has_class(node, class),
        })
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => f.write_str(tag)?,
            None if self.simples.is_empty() => f.write_str("*")?,
            None => {}
        }

        for simple in &self.simples {
            match simple {
                Simple::Id(id) => write!(f, "#{id}")?,
                Simple::Class(class) => write!(f, ".{class}")?,
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Simple {
    Id(String),
    Class(String),
}
