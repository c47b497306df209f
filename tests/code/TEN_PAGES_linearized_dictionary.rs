Dictionary::from_iter([
    ("Linearized", DirectValue::from(1.0)),
    ("L", DirectValue::from(11000i64)),
    ("H", DirectValue::from(vec![1000i64, 200])),
    ("O", DirectValue::from(20i64)),
    ("E", DirectValue::from(4000i64)),
    ("N", DirectValue::from(10i64)),
    ("T", DirectValue::from(10900i64)),
    ("P", DirectValue::from(3i64)),
])
