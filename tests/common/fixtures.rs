use serde_json::{Value, json};

pub fn drill() -> Value {
    json!({
        "name": "Cordless Drill",
        "internalId": "R-1001",
        "code": "DRL-18V",
        "system": { "name": "Workshop" },
        "locations": [{ "name": "Shelf A" }, { "name": "Van 2" }],
        "tags": ["power tool", "18V"]
    })
}

pub fn purchase_order() -> Value {
    json!({
        "id": "PO-1",
        "itemList": [
            { "quantity": 2, "resource": { "name": "Saw", "internalId": "R1" } },
            { "quantity": 1, "resource": { "name": "Hammer", "internalId": "R2" } }
        ]
    })
}

/// A wishlist with `count` entries, each carrying a bar code.
pub fn wishlist(count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "priority": i % 3,
                "resource": {
                    "name": format!("Wish {i}"),
                    "barCode": format!("BC-{i:03}"),
                    "unit": { "name": "pcs" }
                }
            })
        })
        .collect();
    json!({ "id": "W-1", "items": items })
}
