use anyhow::Result;
use json_named_fields::{from_json, named_fields, to_json, to_json_named};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Preferences {
    theme: String,
    language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
    email: String,
    #[serde(skip)]
    password: String,
    internal_notes: Option<String>,
    preferences: Preferences,
}

named_fields!(User {
    "summary" => ["id", "name"],
    "contact" => ["id", "name", "email"],
    "contact" => ["email"],
    "profile" => ["id", "preferences"],
    "everything" => [],
});

#[derive(Debug, Serialize)]
struct AuditEntry {
    actor: String,
    action: String,
    at: String,
}

#[derive(Debug, Serialize)]
struct Session {
    token: String,
    user_id: u64,
}

named_fields!(Session, "public" => ["user_id"]);

fn sample_user() -> User {
    User {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "secret123".to_string(),
        internal_notes: Some("VIP customer".to_string()),
        preferences: Preferences {
            theme: "dark".to_string(),
            language: "en".to_string(),
        },
    }
}

/// 只保留 selector 列出的欄位，值不變
#[test]
fn test_named_selector_keeps_only_listed_fields() -> Result<()> {
    let full = to_json(&sample_user())?;
    let node = to_json_named(&sample_user(), Some("summary"))?;

    let keys: Vec<_> = node.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["id", "name"]);
    assert_eq!(node["id"], full["id"]);
    assert_eq!(node["name"], full["name"]);
    assert!(node.get("email").is_none());
    assert!(node.get("preferences").is_none());

    Ok(())
}

/// 未宣告 selector 的型別：任何名稱都不過濾
#[test]
fn test_type_without_selectors_is_serialized_whole() -> Result<()> {
    let entry = AuditEntry {
        actor: "admin".to_string(),
        action: "login".to_string(),
        at: "2024-03-20T14:45:00Z".to_string(),
    };

    let full = to_json(&entry)?;
    assert_eq!(
        full,
        json!({"actor": "admin", "action": "login", "at": "2024-03-20T14:45:00Z"})
    );

    let mut registry = json_named_fields::SelectorRegistry::new();
    registry.register::<Session>();
    assert_eq!(registry.to_json_named(&entry, Some("public"))?, full);
    assert_eq!(registry.to_json_named(&entry, None)?, full);

    Ok(())
}

#[test]
fn test_unknown_selector_name_returns_full_tree() -> Result<()> {
    let full = to_json(&sample_user())?;
    assert_eq!(to_json_named(&sample_user(), Some("no-such-selector"))?, full);
    assert_eq!(to_json_named(&sample_user(), None)?, full);
    Ok(())
}

/// 同名 selector 依序套用，逐步縮小結果
#[test]
fn test_same_named_selectors_narrow_progressively() -> Result<()> {
    let node = to_json_named(&sample_user(), Some("contact"))?;
    assert_eq!(node, json!({"email": "john@example.com"}));
    Ok(())
}

#[test]
fn test_empty_selector_does_not_strip_fields() -> Result<()> {
    let full = to_json(&sample_user())?;
    let node = to_json_named(&sample_user(), Some("everything"))?;
    assert_eq!(node, full);
    assert_eq!(node.as_object().unwrap().len(), 5);
    Ok(())
}

/// 巢狀物件不會被過濾，即使欄位名稱與 selector 無關
#[test]
fn test_nested_values_are_kept_intact() -> Result<()> {
    let node = to_json_named(&sample_user(), Some("profile"))?;
    assert_eq!(
        node,
        json!({
            "id": 1,
            "preferences": {"theme": "dark", "language": "en"}
        })
    );
    Ok(())
}

#[test]
fn test_excluded_field_never_serialized() -> Result<()> {
    let full = to_json(&sample_user())?;
    assert!(full.get("password").is_none());
    assert_eq!(full["internal_notes"], json!("VIP customer"));
    Ok(())
}

#[test]
fn test_round_trip_restores_visible_fields() -> Result<()> {
    let original = sample_user();
    let restored: User = from_json(&to_json(&original)?)?;

    assert_eq!(restored.id, original.id);
    assert_eq!(restored.name, original.name);
    assert_eq!(restored.email, original.email);
    assert_eq!(restored.internal_notes, original.internal_notes);
    assert_eq!(restored.preferences, original.preferences);
    assert!(restored.password.is_empty());

    Ok(())
}

#[test]
fn test_filtered_tree_does_not_deserialize_into_full_type() -> Result<()> {
    let node = to_json_named(&sample_user(), Some("summary"))?;
    let result: json_named_fields::Result<User> = from_json(&node);

    match result {
        Err(json_named_fields::JsonError::ConversionError(e)) => {
            assert!(e.to_string().contains("missing field"));
        }
        other => panic!("expected conversion error, got {:?}", other),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct Page<T> {
    items: Vec<T>,
    cursor: Option<String>,
    total: usize,
}

named_fields!(impl<T> Page<T> {
    "items" => ["items"],
    "paging" => ["cursor", "total"],
});

/// 泛型型別同樣可以宣告 selector
#[test]
fn test_generic_type_selectors() -> Result<()> {
    let page = Page {
        items: vec![sample_user()],
        cursor: Some("next-2".to_string()),
        total: 11,
    };

    let paging = to_json_named(&page, Some("paging"))?;
    assert_eq!(paging, json!({"cursor": "next-2", "total": 11}));

    // 巢狀的 User 不受外層 selector 影響
    let items = to_json_named(&page, Some("items"))?;
    assert_eq!(items["items"][0], to_json(&sample_user())?);
    assert_eq!(items.as_object().unwrap().len(), 1);

    let numbers = Page {
        items: vec![1, 2],
        cursor: None,
        total: 2,
    };
    assert_eq!(
        to_json_named(&numbers, Some("items"))?,
        json!({"items": [1, 2]})
    );

    Ok(())
}
