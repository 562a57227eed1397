//! Declarations every analyzer must reject, with the same error.
use reform::Reflect;

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus1(#[reform("bogus")] pub String);

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus2 {
    #[reform("bogus")]
    bogus: String,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus3 {
    #[reform("")]
    pub bogus: String,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus4 {
    #[reform("bogus,omitempty")]
    pub bogus: String,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus5 {
    pub bogus: String,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus6 {
    #[reform("bogus,pk")]
    pub bogus: Option<i32>,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus7 {
    #[reform("bogus,pk")]
    pub bogus: Vec<u8>,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus8 {
    #[reform("bogus,pk")]
    pub bogus: [u8; 16],
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus9 {
    #[reform("bogus,pk")]
    pub bogus1: String,
    #[reform("bogus")]
    pub bogus2: String,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus10 {
    #[reform("bogus1,pk")]
    pub bogus1: String,
    #[reform("bogus2,pk")]
    pub bogus2: String,
}

#[derive(Reflect)]
#[reform("a.b.c")]
pub struct Bogus11 {
    #[reform("bogus")]
    pub bogus: String,
}

#[derive(Reflect)]
#[reform("bogus")]
pub struct Bogus12 {
    #[reform(bogus)]
    pub bogus: String,
}
