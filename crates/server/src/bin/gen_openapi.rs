use server::openapi::ApiDoc;
use utoipa::OpenApi;

/// Print the OpenAPI document, or write it to the path given as the first argument.
fn main() {
    let spec = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialize OpenAPI spec to JSON");

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, spec).expect("Failed to write OpenAPI spec");
            eprintln!("Wrote OpenAPI spec to {path}");
        }
        None => println!("{spec}"),
    }
}
