#[cfg(feature = "csr")]
fn main() {
    kanban::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("kanban is a browser app; build it with `trunk serve --features csr`");
}
