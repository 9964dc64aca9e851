//! All user-facing chat texts and keyboard button labels

// ==================== User flow ====================

pub const START_MESSAGE: &str = "Добро пожаловать! Выберите нужный раздел:";

pub const SUPPORT_PROMPT: &str = "Опишите ваш вопрос, и наши специалисты свяжутся с вами в ближайшее время!";

pub const QUESTION_FORWARDED: &str = "Ваш вопрос передан специалистам! С Вами свяжутся в ближайшее время!";

pub const INSTRUCTION_UNAVAILABLE: &str = "Инструкция пока недоступна";

pub const MENU_FALLBACK: &str = "Пожалуйста, выберите один из пунктов меню:";

pub const SUPPORT_CHAT_NOT_CONFIGURED: &str = "⚠️ Чат поддержки не настроен. Обратитесь к администратору.";

pub const BTN_SUPPORT: &str = "Служба поддержки";
pub const BTN_INSTRUCTION: &str = "Инструкция";

/// Placeholder for users without a public handle.
pub const NO_USERNAME: &str = "отсутствует";

pub const BTN_OPEN_CHAT: &str = "Перейти в чат";

// ==================== Relay ====================

pub const RELAY_TEXT_SENT: &str = "Ответ выслан пользователю!";
pub const RELAY_MEDIA_SENT: &str = "Медиафайл отправлен пользователю!";
pub const RELAY_UNKNOWN_RECIPIENT: &str =
    "❌ Не удалось определить получателя. Отвечайте на сообщение с вопросом пользователя.";

pub const REPLY_HINT: &str = "Для ответа пользователю ответьте на данное сообщение";

// ==================== /setchat ====================

pub const SETCHAT_GROUPS_ONLY: &str = "❌ Эта команда работает только в группах";
pub const SETCHAT_USAGE: &str = "❌ Укажите пароль: /setchat <пароль>";
pub const SETCHAT_WRONG_PASSWORD: &str = "❌ Неверный пароль";
pub const SETCHAT_SAVE_FAILED: &str = "❌ Ошибка при сохранении";

// ==================== Admin flow ====================

pub const ADMIN_PRIVATE_ONLY: &str = "❌ Команда доступна только в личных сообщениях";
pub const ADMIN_PASSWORD_PROMPT: &str = "🔐 Введите пароль администратора:";
pub const ADMIN_ACCESS_DENIED: &str = "❌ Неверный пароль. Доступ запрещён.";
pub const ADMIN_WELCOME: &str = "✅ Добро пожаловать в админ-панель!\n\nВыберите действие:";
pub const ADMIN_EXIT: &str = "👋 Вы вышли из админ-панели.";

pub const ADMIN_UPLOAD_PROMPT: &str = "📄 Отправьте файл с инструкцией:\n\n(Или отправьте /cancel для отмены)";
pub const ADMIN_EDIT_TEXT_PROMPT: &str = "✏️ Введите новый текст для инструкции:\n\n(Или отправьте /cancel для отмены)";
pub const ADMIN_CANCELLED: &str = "Отменено";

pub const ADMIN_UPLOAD_OK: &str = "✅ Инструкция успешно загружена!";
pub const ADMIN_TEXT_OK: &str = "✅ Текст инструкции обновлён!";
pub const ADMIN_SAVE_FAILED: &str = "❌ Ошибка при сохранении";

pub const ADMIN_NOTHING_UPLOADED: &str = "📭 Инструкция пока не загружена";
pub const ADMIN_TEXT_HEADER: &str = "📝 Текст инструкции:";
pub const ADMIN_NO_TEXT: &str = "📝 Текст инструкции не задан";

pub const BTN_ADMIN_UPLOAD: &str = "📄 Загрузить инструкцию (файл)";
pub const BTN_ADMIN_EDIT_TEXT: &str = "✏️ Изменить текст инструкции";
pub const BTN_ADMIN_VIEW: &str = "👁 Посмотреть текущую инструкцию";
pub const BTN_ADMIN_EXIT: &str = "🚪 Выйти из админки";
