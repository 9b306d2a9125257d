use registration_common::{find_declaration, DeclaredService, Lifetime, TypeKey};
use service_macros::service;

trait Renderer {
    fn render(&self) -> String;
}

#[derive(Debug)]
#[service(transient, expose(Renderer))]
struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self) -> String {
        "text".to_string()
    }
}

fn main() {
    assert_eq!(TextRenderer::lifetime(), Lifetime::Transient);
    let declaration = find_declaration(TypeKey::of::<TextRenderer>()).unwrap();
    assert_eq!(declaration.provides, vec![TypeKey::of::<dyn Renderer>()]);
    assert_eq!(TextRenderer.render(), "text");
}
