//! Named-entity chunking over Penn-tagged tokens.
//!
//! Runs of proper nouns become labelled groups in a flat chunk tree; every
//! other token stays a leaf.

use crate::backend::{Entity, TaggedToken};
use crate::text::gazetteer::{self, NameKind};

pub const PERSON: &str = "PERSON";
pub const ORGANIZATION: &str = "ORGANIZATION";
pub const GPE: &str = "GPE";
pub const LOCATION: &str = "LOCATION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkNode {
    Leaf(TaggedToken),
    Group {
        label: &'static str,
        children: Vec<TaggedToken>,
    },
}

pub fn chunk(tokens: &[TaggedToken]) -> Vec<ChunkNode> {
    let mut tree = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if !is_name(&tokens[i]) {
            tree.push(ChunkNode::Leaf(tokens[i].clone()));
            i += 1;
            continue;
        }

        let mut end = i + 1;
        loop {
            if end < tokens.len() && is_name(&tokens[end]) {
                end += 1;
            } else if end + 1 < tokens.len()
                && matches!(tokens[end].text.as_str(), "of" | "&")
                && is_name(&tokens[end + 1])
                && (tokens[end].text == "&" || has_org_keyword(&tokens[i..end]))
            {
                end += 2;
            } else {
                break;
            }
        }

        let children = tokens[i..end].to_vec();
        let previous = i.checked_sub(1).map(|p| tokens[p].text.as_str());
        tree.push(ChunkNode::Group {
            label: label_for(&children, previous),
            children,
        });
        i = end;
    }
    tree
}

/// Keep only the groups, joining each group's tokens with a space.
pub fn flatten(tree: &[ChunkNode]) -> Vec<Entity> {
    tree.iter()
        .filter_map(|node| match node {
            ChunkNode::Leaf(_) => None,
            ChunkNode::Group { label, children } => Some(Entity {
                text: children
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                label: label.to_string(),
                span: None,
            }),
        })
        .collect()
}

fn is_name(token: &TaggedToken) -> bool {
    matches!(token.tag.as_str(), "NNP" | "NNPS")
        && token.text.chars().any(char::is_alphabetic)
        && !gazetteer::is_person_title(&token.text)
        && !gazetteer::is_month(&token.text)
        && !gazetteer::is_weekday(&token.text)
}

fn has_org_keyword(tokens: &[TaggedToken]) -> bool {
    tokens.iter().any(|t| gazetteer::is_org_keyword(&t.text))
}

fn label_for(children: &[TaggedToken], previous: Option<&str>) -> &'static str {
    if has_org_keyword(children) {
        return ORGANIZATION;
    }
    let name = children
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    match gazetteer::lookup(&name) {
        Some(NameKind::Organization) => return ORGANIZATION,
        Some(NameKind::Place | NameKind::Group) => return GPE,
        Some(NameKind::Region) => return LOCATION,
        None => {}
    }
    if previous.is_some_and(gazetteer::is_person_title)
        || gazetteer::is_first_name(&children[0].text)
    {
        return PERSON;
    }
    if let [only] = children {
        let letters: Vec<char> = only.text.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase()) {
            return ORGANIZATION;
        }
    }
    PERSON
}
