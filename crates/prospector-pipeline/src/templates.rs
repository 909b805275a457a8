//! Spanish outreach text attached to every lead.

/// Base of the per-business landing page URL.
pub const LANDING_BASE_URL: &str = "https://tuguiamalaga.com";

/// `https://tuguiamalaga.com/{slug}`.
#[must_use]
pub fn landing_url(slug: &str) -> String {
    format!("{LANDING_BASE_URL}/{slug}")
}

/// The three outreach artifacts for one business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachMessages {
    pub email_subject: String,
    pub email_body: String,
    pub chat_message: String,
}

impl OutreachMessages {
    /// Renders the fixed templates for `name`, linking to the page for `slug`.
    #[must_use]
    pub fn render(name: &str, slug: &str) -> Self {
        let url = landing_url(slug);

        let email_subject = format!("{name}: ya tenéis vuestra página en Tu Guía Málaga");

        let email_body = format!(
            "Hola, equipo de {name}:\n\
             \n\
             Somos Tu Guía Málaga, una guía local que ayuda a vecinos y visitantes \
             a descubrir los mejores negocios de la ciudad.\n\
             \n\
             Hemos preparado una página de muestra para {name}, con vuestra \
             dirección, horario y forma de contacto, lista para compartir:\n\
             {url}\n\
             \n\
             Es gratuita y podéis pedirnos cualquier cambio respondiendo a este correo. \
             Si os interesa, también podemos destacarla en nuestras recomendaciones.\n\
             \n\
             Un saludo,\n\
             El equipo de Tu Guía Málaga"
        );

        let chat_message = format!(
            "¡Hola! Somos Tu Guía Málaga. Hemos creado una página para {name} \
             en nuestra guía local: {url} ¿Os gustaría revisarla o completarla? \
             Es gratis."
        );

        Self {
            email_subject,
            email_body,
            chat_message,
        }
    }
}
