use serde::{Deserialize, Serialize};

/// Language used for every label the gateway produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-us")]
    EnUs,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-us",
            Self::PtBr => "pt-br",
        }
    }

    #[must_use]
    pub fn terms(self) -> &'static Terms {
        match self {
            Self::EnUs => &EN_US,
            Self::PtBr => &PT_BR,
        }
    }
}

/// Translated labels and messages for one language.
#[derive(Debug)]
pub struct Terms {
    pub intro: &'static str,
    pub today_is: &'static str,
    pub widget: &'static str,
    pub active_list: &'static str,
    pub tasks_completed: &'static str,
    pub pending_tasks: &'static str,
    pub archived_tasks: &'static str,
    pub water_consumed: &'static str,
    pub note: &'static str,
    pub note_content: &'static str,
    pub upcoming_reminders: &'static str,
    pub reminder_on: &'static str,
    pub no_reminders: &'static str,
    pub column: &'static str,
    pub gym_intro: &'static str,
    pub active_workout: &'static str,
    pub recent_history: &'static str,
    pub available_workouts: &'static str,
    pub no_exercises: &'static str,
    pub links_intro: &'static str,
    pub pomodoro_intro: &'static str,
    pub pomodoro_active: &'static str,
    pub pomodoro_mode: &'static str,
    pub pomodoro_left: &'static str,
    pub pomodoro_cycles: &'static str,
    pub diet_intro: &'static str,
    pub calories_consumed: &'static str,
    pub protein_consumed: &'static str,
    pub system_prompt: &'static str,
    pub default_query: &'static str,
    pub missing_api_key: &'static str,
    pub error_prefix: &'static str,
    pub connection_failed: &'static str,
    pub coach_greeting: &'static str,
}

pub static EN_US: Terms = Terms {
    intro: "Here is the current state of the user's LifeHub dashboard",
    today_is: "Today is",
    widget: "Widget",
    active_list: "Current Active List",
    tasks_completed: "tasks completed",
    pending_tasks: "Pending tasks",
    archived_tasks: "tasks archived",
    water_consumed: "Water Consumed Today",
    note: "Note",
    note_content: "Note Content",
    upcoming_reminders: "Upcoming Reminders",
    reminder_on: "on",
    no_reminders: "No pending reminders",
    column: "Column",
    gym_intro: "Gym/Workout Stats:",
    active_workout: "User is currently doing a workout",
    recent_history: "Recent History (Last 10)",
    available_workouts: "Available workout routines",
    no_exercises: "No exercises",
    links_intro: "Pinned Links:",
    pomodoro_intro: "Focus/Pomodoro Timer Status:",
    pomodoro_active: "User is currently running a focus timer",
    pomodoro_mode: "Current mode",
    pomodoro_left: "left",
    pomodoro_cycles: "Cycles completed",
    diet_intro: "Diet & Nutrition Stats:",
    calories_consumed: "Calories consumed today",
    protein_consumed: "Protein consumed",
    system_prompt: "You are a helpful, encouraging Life Coach. Be concise (max 2 sentences unless asked otherwise). Always respond in English.",
    default_query: "Analyze my dashboard.",
    missing_api_key: "Please configure your API Key in the settings (gear icon) to use the AI features.",
    error_prefix: "Error",
    connection_failed: "Failed to connect to AI service.",
    coach_greeting: "Hi! I'm your LifeHub coach. I can see your tasks and wellness data. How can I help you today?",
};

pub static PT_BR: Terms = Terms {
    intro: "Aqui está o estado atual do painel LifeHub do usuário",
    today_is: "Hoje é",
    widget: "Widget",
    active_list: "Lista Ativa Atual",
    tasks_completed: "tarefas concluídas",
    pending_tasks: "Tarefas pendentes",
    archived_tasks: "tarefas arquivadas",
    water_consumed: "Água Consumida Hoje",
    note: "Nota",
    note_content: "Conteúdo da Nota",
    upcoming_reminders: "Próximos Lembretes",
    reminder_on: "em",
    no_reminders: "Sem lembretes pendentes",
    column: "Coluna",
    gym_intro: "Estatísticas de Academia/Treino:",
    active_workout: "Usuário está treinando agora",
    recent_history: "Histórico Recente (Últimos 10)",
    available_workouts: "Rotinas de treino disponíveis",
    no_exercises: "Sem exercícios",
    links_intro: "Links Fixados:",
    pomodoro_intro: "Status do Temporizador Pomodoro/Foco:",
    pomodoro_active: "Usuário está com o temporizador rodando",
    pomodoro_mode: "Modo atual",
    pomodoro_left: "restantes",
    pomodoro_cycles: "Ciclos completados",
    diet_intro: "Estatísticas de Dieta/Nutrição:",
    calories_consumed: "Calorias consumidas hoje",
    protein_consumed: "Proteína consumida",
    system_prompt: "Você é um Life Coach prestativo e encorajador. Seja conciso (máximo 2 frases, a menos que solicitado o contrário). Responda sempre em Português do Brasil.",
    default_query: "Analise meu painel.",
    missing_api_key: "Por favor, configure sua chave de API nas configurações (ícone de engrenagem) para usar os recursos de IA.",
    error_prefix: "Erro",
    connection_failed: "Falha ao conectar ao serviço de IA.",
    coach_greeting: "Olá! Sou seu coach LifeHub. Posso ver suas tarefas e dados de bem-estar. Como posso ajudar hoje?",
};
