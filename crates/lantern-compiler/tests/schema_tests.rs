use lantern_compiler::error::ConfigError;
use lantern_compiler::schema::parse_type_expr;
use lantern_ir::types::{ParamKind, ParamNode};

fn kind_of(node: &ParamNode) -> &ParamKind {
    &node.kind
}

#[test]
fn test_scalar_keywords() {
    assert_eq!(*kind_of(&parse_type_expr("int").unwrap()), ParamKind::Int);
    assert_eq!(*kind_of(&parse_type_expr("float").unwrap()), ParamKind::Float);
    assert_eq!(*kind_of(&parse_type_expr("bool").unwrap()), ParamKind::Bool);
}

#[test]
fn test_scalar_keywords_are_trimmed() {
    assert_eq!(*kind_of(&parse_type_expr("  int  ").unwrap()), ParamKind::Int);
}

#[test]
fn test_scalar_with_trailing_garbage_is_rejected() {
    assert!(matches!(
        parse_type_expr("int x").unwrap_err(),
        ConfigError::UnrecognizedType { .. }
    ));
}

#[test]
fn test_str_captures_pool_verbatim() {
    let node = parse_type_expr("str (!bC4").unwrap();
    assert_eq!(
        node.kind,
        ParamKind::Str {
            pool: "!bC4".to_string()
        }
    );
}

#[test]
fn test_str_pool_keeps_inner_whitespace() {
    let node = parse_type_expr("str(a b c)").unwrap();
    assert_eq!(
        node.kind,
        ParamKind::Str {
            pool: "a b c)".to_string()
        }
    );
}

#[test]
fn test_str_without_paren_is_rejected() {
    assert!(matches!(
        parse_type_expr("str abc").unwrap_err(),
        ConfigError::MissingParenthesis { .. }
    ));
}

#[test]
fn test_list_of_int() {
    let node = parse_type_expr("list(int").unwrap();
    let ParamKind::List { element } = &node.kind else {
        panic!("expected a list, got {:?}", node.kind);
    };
    assert_eq!(element.kind, ParamKind::Int);
}

#[test]
fn test_iterables_tolerate_whitespace() {
    let node = parse_type_expr("set  (float").unwrap();
    let ParamKind::Set { element } = &node.kind else {
        panic!("expected a set, got {:?}", node.kind);
    };
    assert_eq!(element.kind, ParamKind::Float);
}

#[test]
fn test_deep_list_nesting() {
    let node = parse_type_expr("list ( list ( list ( str (qWeRtY   ").unwrap();
    let ParamKind::List { element } = &node.kind else {
        panic!("expected a list");
    };
    let ParamKind::List { element } = &element.kind else {
        panic!("expected a nested list");
    };
    let ParamKind::List { element } = &element.kind else {
        panic!("expected a third list");
    };
    assert_eq!(
        element.kind,
        ParamKind::Str {
            pool: "qWeRtY".to_string()
        }
    );
}

#[test]
fn test_iterable_without_paren_is_rejected() {
    assert!(matches!(
        parse_type_expr("list int").unwrap_err(),
        ConfigError::MissingParenthesis { .. }
    ));
    assert!(matches!(
        parse_type_expr("tuple").unwrap_err(),
        ConfigError::MissingParenthesis { .. }
    ));
}

#[test]
fn test_dict_of_scalars() {
    let node = parse_type_expr("dict (bool : int").unwrap();
    let ParamKind::Dict { key, value } = &node.kind else {
        panic!("expected a dict, got {:?}", node.kind);
    };
    assert_eq!(key.kind, ParamKind::Bool);
    assert_eq!(value.kind, ParamKind::Int);
}

#[test]
fn test_dict_with_composite_key_and_value() {
    let node = parse_type_expr("dict(tuple(bool: list(int").unwrap();
    let ParamKind::Dict { key, value } = &node.kind else {
        panic!("expected a dict");
    };
    let ParamKind::Tuple { element } = &key.kind else {
        panic!("expected a tuple key, got {:?}", key.kind);
    };
    assert_eq!(element.kind, ParamKind::Bool);
    let ParamKind::List { element } = &value.kind else {
        panic!("expected a list value, got {:?}", value.kind);
    };
    assert_eq!(element.kind, ParamKind::Int);
}

#[test]
fn test_dict_nested_in_value_position() {
    let node = parse_type_expr("dict(int:dict(tuple(int:dict(bool:int").unwrap();
    let ParamKind::Dict { key, value } = &node.kind else {
        panic!("expected the outer dict");
    };
    assert_eq!(key.kind, ParamKind::Int);
    let ParamKind::Dict { key, value } = &value.kind else {
        panic!("expected the middle dict");
    };
    assert!(matches!(key.kind, ParamKind::Tuple { .. }));
    let ParamKind::Dict { key, value } = &value.kind else {
        panic!("expected the inner dict");
    };
    assert_eq!(key.kind, ParamKind::Bool);
    assert_eq!(value.kind, ParamKind::Int);
}

#[test]
fn test_dict_key_may_itself_be_a_dict() {
    // The inner dict's colon belongs to the key; the split happens at the
    // second colon.
    let node = parse_type_expr("dict(dict(bool:int:float").unwrap();
    let ParamKind::Dict { key, value } = &node.kind else {
        panic!("expected the outer dict");
    };
    let ParamKind::Dict { key: inner_key, value: inner_value } = &key.kind else {
        panic!("expected a dict-typed key, got {:?}", key.kind);
    };
    assert_eq!(inner_key.kind, ParamKind::Bool);
    assert_eq!(inner_value.kind, ParamKind::Int);
    assert_eq!(value.kind, ParamKind::Float);
}

#[test]
fn test_dict_key_pool_may_contain_keyword_text() {
    let node = parse_type_expr("dict(str(mydict:int").unwrap();
    let ParamKind::Dict { key, value } = &node.kind else {
        panic!("expected a dict, got {:?}", node.kind);
    };
    assert_eq!(
        key.kind,
        ParamKind::Str {
            pool: "mydict".to_string()
        }
    );
    assert_eq!(value.kind, ParamKind::Int);
}

#[test]
fn test_dict_without_paren_is_rejected() {
    assert!(matches!(
        parse_type_expr("dict bool : int").unwrap_err(),
        ConfigError::MissingParenthesis { .. }
    ));
}

#[test]
fn test_dict_without_colon_is_rejected() {
    assert!(matches!(
        parse_type_expr("dict(int").unwrap_err(),
        ConfigError::MissingColon { .. }
    ));
}

#[test]
fn test_dict_with_doubled_colon_is_rejected() {
    assert!(matches!(
        parse_type_expr("dict(int::int").unwrap_err(),
        ConfigError::SpuriousColon { .. }
    ));
}

#[test]
fn test_dict_ending_with_colon_is_rejected() {
    assert!(matches!(
        parse_type_expr("dict(int:int:").unwrap_err(),
        ConfigError::SpuriousColon { .. }
    ));
}

#[test]
fn test_unknown_keyword_is_rejected() {
    assert!(matches!(
        parse_type_expr("integer").unwrap_err(),
        ConfigError::UnrecognizedType { .. }
    ));
}

#[test]
fn test_new_nodes_have_empty_domains() {
    let node = parse_type_expr("list(int").unwrap();
    assert!(node.exhaustive.is_empty());
    assert!(node.random.is_empty());
}
