// Chat replies shared by several integration tests
// WHY: Property checks run over the same realistic messages the golden cases are drawn from

/// Long reply that can only split at sentence periods
pub const PERIOD_TEXT: &str = "Este producto es excelente para uso diario y tiene una calidad premium que durará años. Además, viene con garantía extendida de 2 años sin costo adicional. También incluye envío gratuito a toda la ciudad y instalación profesional gratuita. ¿Te interesa conocer más detalles?";

/// Question, follow-up sentence and a closing question
pub const QUESTION_TEXT: &str = "¿Qué te parece este Nike Air Max 90 en color Hueso claro? También lo tengo en Blanco/Gris universitario. Si prefieres otro modelo, el Nike Pegasus Plus está disponible en Negro o en Azul glacial. ¿Te gustaría ver más opciones?";

/// Data request with an intro line and a numbered list
pub const LIST_TEXT: &str = "Por favor envíame los siguientes datos:\n\n1. Nombre completo\n2. Correo electrónico (ejemplo: juan.perez@gmail.com)\n3. Número de teléfono\n\nTe contactaremos pronto.";

/// Parentheses around an email, an invalid value and a question
pub const PARENTHESES_TEXT: &str = "David, hay algunos datos que no están completos o son ambiguos: el email parece incompleto (debe ser algo como david@ku.com) 📧, la cédula '123' es inválida (necesita ser un número real de cédula) 📄, y la dirección 'Av 5 rockefeller' no es clara (¿puedes especificar la avenida completa y el número?). El barrio 'Catallo' está bien. Por favor, envíame la información corregida.";

/// Nested parentheses before a sentence period
pub const NESTED_PARENTHESES_TEXT: &str = "La información requerida es la siguiente: nombre completo (tal como aparece en tu documento (cédula o pasaporte)). Además necesitamos tu dirección completa.";

/// Plain domains, a parenthesized domain and a closing question
pub const DOMAIN_TEXT: &str = "¡Hola! Me llamo Antonia. Estoy a tu servicio en Nike 😊. No, actualmente no hacemos envíos a Bucaramanga (Santander). Si necesitas el producto, puedes comprarlo en línea (Nike.com.co) y luego elegir una opción de recogida en una tienda Nike cercana o solicitar el envío a una ciudad dentro de nuestra zona de cobertura. ¿Podrías decirme tu nombre para poder asistirte mejor? 😊";

/// Several country-code domains across sentences
pub const MULTI_DOMAIN_TEXT: &str = "Visita Nike.com.co para ver nuestro catálogo completo y Adidas.com.mx para comparar precios. También puedes revisar Puma.co.uk si buscas ofertas internacionales. ¿Te gustaría que te ayude con algo más?";

/// Every fixture whose chunks must carry the full input content
pub const CONTENT_PRESERVING_TEXTS: &[&str] = &[
    PERIOD_TEXT,
    QUESTION_TEXT,
    LIST_TEXT,
    PARENTHESES_TEXT,
    NESTED_PARENTHESES_TEXT,
    DOMAIN_TEXT,
    MULTI_DOMAIN_TEXT,
];
