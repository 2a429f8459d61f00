//! Static schema tables, one per [`MapiOperation`](crate::MapiOperation).

use crate::schema::{Field, Rule, Schema};

const S: Rule = Rule::STRING;

const CURRENCY: Rule = Rule::Str {
    min_len: Some(3),
    max_len: Some(3),
};

const CUSTOMER: Rule = Rule::Str {
    min_len: None,
    max_len: Some(100),
};

/// Thirty days, in seconds.
const EXPIRES_IN: Rule = Rule::Int {
    min: 0,
    max: 2_592_000,
};

const USER_FIELDS: &[Field] = &[
    Field::required("user_id", S),
    Field::optional("roles", Rule::ListOf(&Rule::OneOf(&["user", "superuser"]))),
    Field::optional("netmask", S),
    Field::optional(
        "secret",
        Rule::Str {
            min_len: Some(8),
            max_len: Some(64),
        },
    ),
    Field::optional("pubkey", S),
];

const LOCATION: Rule = Rule::Object(&[
    Field::optional("latitude", Rule::Number),
    Field::optional("longitude", Rule::Number),
    Field::optional("accuracy", Rule::Number),
]);

const LINK: Rule = Rule::Object(&[
    Field::optional("uri", S),
    Field::optional("caption", S),
    Field::optional("show_on", Rule::ListOf(&Rule::OneOf(&["pending", "fail", "ok"]))),
]);

const METADATA: Rule = Rule::Nullable(&Rule::ListOf(&Rule::Object(&[
    Field::optional("key", S),
    Field::optional("value", S),
])));

const TAG: Rule = Rule::Object(&[Field::required("tag_id", S), Field::required("label", S)]);

const LINE_ITEMS: Rule = Rule::Nullable(&Rule::ListOf(&Rule::Object(&[
    Field::required("product_id", S),
    Field::optional("vat", S),
    Field::optional("metadata", METADATA),
    Field::optional("description", S),
    Field::optional("vat_rate", S),
    Field::required("total", S),
    Field::optional("tags", Rule::ListOf(&TAG)),
    Field::required("item_cost", S),
    Field::required("quantity", S),
])));

pub static CREATE_USER: Schema = Schema {
    fields: USER_FIELDS,
};

pub static UPDATE_USER: Schema = Schema {
    fields: USER_FIELDS,
};

pub static CREATE_POS: Schema = Schema {
    fields: &[
        Field::required("name", S),
        Field::required("pos_type", S),
        Field::required("pos_id", S),
        Field::optional("location", LOCATION),
    ],
};

pub static UPDATE_POS: Schema = Schema {
    fields: &[
        Field::required("pos_id", S),
        Field::required("name", S),
        Field::required("pos_type", S),
        Field::optional("location", LOCATION),
    ],
};

pub static CREATE_SHORTLINK: Schema = Schema {
    fields: &[
        Field::optional("callback_uri", S),
        Field::optional("description", S),
        Field::optional("serial_number", S),
    ],
};

pub static UPDATE_SHORTLINK: Schema = Schema {
    fields: &[
        Field::required("shortlink_id", S),
        Field::optional("callback_uri", S),
        Field::optional("description", S),
    ],
};

pub static CREATE_PAYMENT_REQUEST: Schema = Schema {
    fields: &[
        Field::optional("ledger", S),
        Field::optional("display_message_uri", S),
        Field::optional("callback_uri", S),
        Field::required("customer", CUSTOMER),
        Field::required("currency", CURRENCY),
        Field::required("amount", S),
        Field::optional("additional_amount", S),
        Field::optional("required_scope", S),
        Field::optional("required_scope_text", S),
        Field::optional("additional_edit", Rule::Bool),
        Field::required("allow_credit", Rule::Bool),
        Field::required("pos_id", S),
        Field::required("pos_tid", S),
        Field::optional("text", S),
        Field::required("action", Rule::OneOf(&["auth", "sale", "AUTH", "SALE"])),
        Field::required("expires_in", EXPIRES_IN),
        Field::optional("links", Rule::ListOf(&LINK)),
        Field::optional("line_items", LINE_ITEMS),
    ],
};

pub static UPDATE_PAYMENT_REQUEST: Schema = Schema {
    fields: &[
        Field::optional("tid", S),
        Field::optional("ledger", S),
        Field::optional("display_message_uri", S),
        Field::optional("callback_uri", S),
        Field::optional("currency", CURRENCY),
        Field::optional("amount", S),
        Field::optional("additional_amount", S),
        Field::optional("required_scope", S),
        Field::optional("required_scope_text", S),
        Field::optional("capture_id", S),
        Field::optional("refund_id", S),
        Field::optional("text", S),
        Field::optional(
            "action",
            Rule::OneOf(&[
                "reauth", "capture", "abort", "release", "refund", "REAUTH", "CAPTURE", "ABORT",
                "RELEASE", "REFUND",
            ]),
        ),
        Field::optional("line_items", LINE_ITEMS),
    ],
};

pub static UPDATE_TICKET: Schema = Schema {
    fields: &[
        Field::required("tid", S),
        Field::optional("tickets", Rule::AnyList),
    ],
};

pub static CREATE_PERMISSION_REQUEST: Schema = Schema {
    fields: &[
        Field::optional("ledger", S),
        Field::required("customer", CUSTOMER),
        Field::required("pos_id", S),
        Field::required("pos_tid", S),
        Field::optional("text", S),
        Field::optional("callback_uri", S),
        Field::required("scope", S),
        Field::optional("expires_in", EXPIRES_IN),
    ],
};

pub static CREATE_LEDGER: Schema = Schema {
    fields: &[Field::required("currency", S), Field::optional("description", S)],
};

pub static UPDATE_LEDGER: Schema = Schema {
    fields: &[Field::required("ledger_id", S), Field::optional("description", S)],
};

pub static CLOSE_REPORT: Schema = Schema {
    fields: &[
        Field::required("ledger_id", S),
        Field::required("report_id", S),
        Field::optional("callback_uri", S),
    ],
};
