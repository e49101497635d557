use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

/// Переход на другой маршрут после успешной операции
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigator поверх leptos_router. Создавать только внутри `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path, options| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate -> {}", path);
        (self.navigate)(path, NavigateOptions::default());
    }
}
