//! Tests for definition parsing, validation and serialization

#[cfg(test)]
mod tests {
    use huffdraw::TreeRenderError;
    use huffdraw::tree::definition::to_definition;
    use huffdraw::tree::{NodeDefinition, TreeDocument, english_tree, load, load_path, load_str};
    use std::collections::HashSet;

    fn is_malformed_at<T: std::fmt::Debug>(result: &huffdraw::Result<T>, expected: &str) -> bool {
        matches!(result, Err(TreeRenderError::MalformedTree { prefix, .. }) if prefix == expected)
    }

    // Tests a two-leaf definition loads with derived prefixes
    // Verified by swapping the branch digits in child_prefix
    #[test]
    fn test_load_derives_prefixes() {
        let definition = NodeDefinition::internal(
            NodeDefinition::leaf('a', Some(1.0)),
            NodeDefinition::leaf('b', Some(2.0)),
        );
        let tree = load(&definition).unwrap();

        assert_eq!(tree.prefix(), "");
        assert_eq!(tree.left().map(|n| (n.prefix(), n.symbol())), Some(("0", Some('a'))));
        assert_eq!(tree.right().map(|n| (n.prefix(), n.symbol())), Some(("1", Some('b'))));
    }

    // Tests a node with only a left child is rejected
    // Verified by treating single-child nodes as leaves
    #[test]
    fn test_load_rejects_single_child() {
        let definition = NodeDefinition {
            code: Some(String::new()),
            left: Some(Box::new(NodeDefinition {
                code: Some("0".to_string()),
                ..NodeDefinition::leaf('a', None)
            })),
            ..NodeDefinition::default()
        };

        assert!(is_malformed_at(&load(&definition), ""));
    }

    // Tests a node with only a right child is rejected
    // Verified by removing the right-only match arm
    #[test]
    fn test_load_rejects_right_only_child() {
        let definition = NodeDefinition {
            right: Some(Box::new(NodeDefinition::leaf('b', None))),
            ..NodeDefinition::default()
        };

        assert!(is_malformed_at(&load(&definition), ""));
    }

    // Tests a leaf without a symbol is rejected
    // Verified by defaulting missing symbols
    #[test]
    fn test_load_rejects_leaf_without_symbol() {
        let definition =
            NodeDefinition::internal(NodeDefinition::leaf('a', None), NodeDefinition::default());

        assert!(is_malformed_at(&load(&definition), "1"));
    }

    // Tests an internal node carrying a symbol is rejected
    // Verified by dropping internal symbols silently
    #[test]
    fn test_load_rejects_internal_symbol() {
        let definition = NodeDefinition {
            symbol: Some('x'),
            ..NodeDefinition::internal(
                NodeDefinition::leaf('a', None),
                NodeDefinition::leaf('b', None),
            )
        };

        assert!(is_malformed_at(&load(&definition), ""));
    }

    // Tests an internal node carrying a weight is rejected
    // Verified by removing the weight check
    #[test]
    fn test_load_rejects_internal_weight() {
        let definition = NodeDefinition {
            weight: Some(3.0),
            ..NodeDefinition::internal(
                NodeDefinition::leaf('a', None),
                NodeDefinition::leaf('b', None),
            )
        };

        assert!(load(&definition).is_err());
    }

    // Tests declared codes must match the node's position
    // Verified by skipping the declared code comparison
    #[test]
    fn test_load_rejects_mismatched_code() {
        let definition = NodeDefinition::internal(
            NodeDefinition {
                code: Some("1".to_string()),
                ..NodeDefinition::leaf('a', None)
            },
            NodeDefinition::leaf('b', None),
        );

        assert!(is_malformed_at(&load(&definition), "0"));
    }

    // Tests repeated symbols are rejected
    // Verified by removing the duplicate symbol scan
    #[test]
    fn test_load_rejects_duplicate_symbol() {
        let definition = NodeDefinition::internal(
            NodeDefinition::leaf('a', None),
            NodeDefinition::leaf('a', None),
        );

        assert!(is_malformed_at(&load(&definition), "1"));
    }

    // Tests JSON in the tooling layout loads, including a bare node record
    // Verified by renaming the char field
    #[test]
    fn test_load_str_accepts_document_and_bare_node() {
        let document = r#"{
            "codes": {"a": "0", "b": "1"},
            "tree": {"code": "", "left": {"char": "a", "freq": 1.5, "code": "0"},
                     "right": {"char": "b", "freq": 2.5, "code": "1"}}
        }"#;
        let bare = r#"{"left": {"char": "a"}, "right": {"char": "b"}}"#;

        let from_document = load_str(document).unwrap();
        let from_bare = load_str(bare).unwrap();

        assert_eq!(from_document.left().and_then(|n| n.weight()), Some(1.5));
        assert_eq!(from_bare.node_count(), 3);
    }

    // Tests code table entries must agree with the tree
    // Verified by skipping the code table comparison
    #[test]
    fn test_document_rejects_disagreeing_code_table() {
        let document = r#"{
            "codes": {"a": "1", "b": "0"},
            "tree": {"left": {"char": "a"}, "right": {"char": "b"}}
        }"#;

        assert!(matches!(
            load_str(document),
            Err(TreeRenderError::MalformedTree { .. })
        ));
    }

    // Tests a code table missing a leaf is rejected
    // Verified by removing the missing entry scan
    #[test]
    fn test_document_rejects_incomplete_code_table() {
        let document = r#"{
            "codes": {"a": "0"},
            "tree": {"left": {"char": "a"}, "right": {"char": "b"}}
        }"#;

        assert!(load_str(document).is_err());
    }

    // Tests invalid JSON and unknown fields surface as parse errors
    // Verified by removing deny_unknown_fields
    #[test]
    fn test_load_str_rejects_unknown_fields() {
        assert!(matches!(
            load_str(r#"{"left": {"char": "a"}, "right": {"char": "b"}, "colour": 3}"#),
            Err(TreeRenderError::DefinitionParse { .. })
        ));
        assert!(matches!(
            load_str("not json"),
            Err(TreeRenderError::DefinitionParse { .. })
        ));
    }

    // Tests load_path reports the file path for parse errors
    // Verified by dropping the path remapping
    #[test]
    fn test_load_path_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        match load_path(&path) {
            Err(TreeRenderError::DefinitionParse { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    // Tests serializing and reloading preserves the tree
    // Verified by omitting weights from to_definition
    #[test]
    fn test_document_preserves_tree() {
        let tree = english_tree().unwrap();
        let document = TreeDocument::from_tree(&tree);
        let json = serde_json::to_string(&document).unwrap();

        assert_eq!(load_str(&json).unwrap(), tree);
        assert_eq!(document.codes.get("e").map(String::as_str), Some("001"));
    }

    // Tests internal records serialize without leaf fields
    // Verified by copying symbols into internal records
    #[test]
    fn test_to_definition_layout() {
        let tree = load_str(r#"{"left": {"char": "a"}, "right": {"char": "b"}}"#).unwrap();
        let json = serde_json::to_value(to_definition(&tree)).unwrap();

        assert_eq!(json["code"], "");
        assert!(json.get("char").is_none());
        assert_eq!(json["left"]["char"], "a");
        assert_eq!(json["right"]["code"], "1");
    }

    // Tests the bundled alphabet is a complete prefix-free code
    // Verified by corrupting a code in the bundled table
    #[test]
    fn test_english_tree() {
        let tree = english_tree().unwrap();
        let leaves = tree.leaves();
        let symbols: HashSet<char> = leaves.iter().filter_map(|l| l.symbol()).collect();

        assert_eq!(leaves.len(), 28);
        assert!(symbols.contains(&' ') && symbols.contains(&'>') && symbols.contains(&'z'));
        assert_eq!(tree.node_count(), 55);
        assert_eq!(tree.height(), 11);
    }
}
