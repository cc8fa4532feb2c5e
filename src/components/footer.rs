use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <p>"© 2025 Medicina Nuclear - Mantenimiento de Equipos. Todos los derechos reservados."</p>
                <div class="footer-links">
                    <a href="#">"Política de Privacidad"</a>
                    <a href="#">"Términos de Uso"</a>
                    <a href="#">"Contacto"</a>
                </div>
            </div>
        </footer>
    }
}
