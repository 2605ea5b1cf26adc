// Thin delegating binary.
//
// The actual server assembly lives in the `apidoc-server` crate.
#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    apidoc_server::run().await
}
