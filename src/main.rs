//! 程序入口：初始化日志、加载 Slint UI，并绑定表单视图模型

use std::{cell::RefCell, path::PathBuf, rc::Rc, time::Instant};

use anyhow::anyhow;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use tracing_subscriber::fmt::SubscriberBuilder;

slint::include_modules!();

mod model;
mod utils;
mod vm;

use model::form_state::{FormState, Strictness};
use utils::fs::probe_file;
use vm::bridge::*;

/// VM桥接器：管理UI与表单状态的交互
struct ViewModelBridge {
    form_state: Rc<RefCell<FormState>>,
}

impl ViewModelBridge {
    /// 创建新的VM桥接器并绑定所有回调
    fn new(app_window: &AppWindow, form_state: Rc<RefCell<FormState>>) -> Self {
        let bridge = Self { form_state };

        // 绑定所有UI回调
        bridge.setup_callbacks(app_window);
        bridge
    }

    /// 设置所有UI回调函数
    fn setup_callbacks(&self, app_window: &AppWindow) {
        let form_state = self.form_state.clone();

        // === 选择答卷文件回调 ===
        {
            let form_state = form_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_pick_student_file(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_pick_student_file(&app_window, &form_state);
                }
            });
        }

        // === 选择标准答案文件回调 ===
        {
            let form_state = form_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_pick_answer_key_file(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_pick_answer_key_file(&app_window, &form_state);
                }
            });
        }

        // === 批改严格度变更回调 ===
        {
            let form_state = form_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_strictness_changed(move |label| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_strictness_changed(&app_window, &form_state, &label.to_string());
                }
            });
        }

        // === 提交批改回调 ===
        {
            let form_state = form_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_submit_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_submit(&app_window, &form_state);
                }
            });
        }
    }

    /// 初始化UI状态
    fn initialize_ui(&self, app_window: &AppWindow) {
        app_window.set_status_message(STATUS_READY.into());

        // 严格度选择器的闭合选项集合
        let labels: Vec<SharedString> = Strictness::LABELS
            .iter()
            .map(|label| SharedString::from(*label))
            .collect();
        app_window.set_strictness_model(ModelRc::new(VecModel::from(labels)));
        app_window.set_strictness_level(Strictness::default().as_label().into());

        Self::sync_to_window(app_window, &self.form_state.borrow());
    }

    /// 显示文件选择对话框
    fn show_file_dialog(title: &str) -> Option<PathBuf> {
        use rfd::FileDialog;

        // 扩展名过滤仅作提示，用户仍可通过"All files"选择任意文件
        let file_path = FileDialog::new()
            .add_filter("Answer sheets (PDF/JPG/PNG)", &ACCEPT_EXTENSIONS[..])
            .add_filter("All files", &["*"])
            .set_title(title)
            .pick_file();

        match file_path {
            Some(path) => {
                tracing::info!("用户选择了文件: {}", path.display());
                Some(path)
            }
            None => {
                tracing::info!("用户取消了文件选择");
                None
            }
        }
    }

    /// 处理答卷文件选择
    fn handle_pick_student_file(app_window: &AppWindow, form_state: &Rc<RefCell<FormState>>) {
        let Some(path) = Self::show_file_dialog("Select the student's answer script") else {
            app_window.set_status_message(STATUS_NO_FILE_CHOSEN.into());
            return;
        };

        match probe_file(&path) {
            Ok(file) => {
                tracing::info!("答卷文件已选择: {} ({} 字节)", file.name, file.size_bytes);
                form_state.borrow_mut().select_student_file(file);
                app_window.set_status_message(STATUS_FILE_CHOSEN.into());
                Self::sync_to_window(app_window, &form_state.borrow());
            }
            Err(e) => {
                // 探测失败保持槽位不变，仅在状态栏与日志中反馈
                tracing::error!("读取答卷文件信息失败: {}", e);
                app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, e).into());
            }
        }
    }

    /// 处理标准答案文件选择（与答卷槽位完全对称）
    fn handle_pick_answer_key_file(app_window: &AppWindow, form_state: &Rc<RefCell<FormState>>) {
        let Some(path) = Self::show_file_dialog("Select the teacher's answer key") else {
            app_window.set_status_message(STATUS_NO_FILE_CHOSEN.into());
            return;
        };

        match probe_file(&path) {
            Ok(file) => {
                tracing::info!("标准答案文件已选择: {} ({} 字节)", file.name, file.size_bytes);
                form_state.borrow_mut().select_answer_key_file(file);
                app_window.set_status_message(STATUS_FILE_CHOSEN.into());
                Self::sync_to_window(app_window, &form_state.borrow());
            }
            Err(e) => {
                tracing::error!("读取标准答案文件信息失败: {}", e);
                app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, e).into());
            }
        }
    }

    /// 处理批改严格度变更（任意时刻生效，包括提交进行中）
    fn handle_strictness_changed(
        app_window: &AppWindow,
        form_state: &Rc<RefCell<FormState>>,
        label: &str,
    ) {
        match Strictness::from_label(label) {
            Some(level) => {
                form_state.borrow_mut().set_strictness(level);
                tracing::info!("批改严格度已设置: {}", level.as_label());
            }
            None => {
                // 选择器是闭合集合，正常流程不会到达这里
                tracing::warn!("忽略未知的严格度标签: {}", label);
                app_window.set_strictness_level(
                    form_state.borrow().strictness.as_label().into(),
                );
            }
        }
    }

    /// 处理提交：操作内部重新校验前置条件，记录快照日志，
    /// 并用一次性定时器在固定延迟后复位提交状态
    fn handle_submit(app_window: &AppWindow, form_state: &Rc<RefCell<FormState>>) {
        let snapshot = match form_state.borrow_mut().begin_submit() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("提交被拒绝: {}", e);
                app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, e).into());
                return;
            }
        };

        // 诊断日志即当前系统的唯一可观测输出（真实后端调用的接入点）
        match serde_json::to_string(&snapshot) {
            Ok(json) => tracing::info!("提交快照: {}", json),
            Err(e) => tracing::error!("提交快照序列化失败: {}", e),
        }

        app_window.set_status_message(STATUS_SUBMITTING.into());
        Self::sync_to_window(app_window, &form_state.borrow());

        // 固定延迟后复位（fire once，不可取消）
        let start_time = Instant::now();
        let form_state = form_state.clone();
        let app_window_weak = app_window.as_weak();
        slint::Timer::single_shot(SUBMIT_RESET_DELAY, move || {
            form_state.borrow_mut().finish_submit();
            tracing::info!("提交处理完成，耗时: {}ms", start_time.elapsed().as_millis());
            if let Some(app_window) = app_window_weak.upgrade() {
                app_window.set_status_message(STATUS_SUBMITTED.into());
                Self::sync_to_window(&app_window, &form_state.borrow());
            }
        });
    }

    /// 将表单状态镜像到窗口属性（UI层所有显示内容均由此派生）
    fn sync_to_window(app_window: &AppWindow, state: &FormState) {
        match &state.student_file {
            Some(file) => {
                app_window.set_student_selected(true);
                app_window.set_student_file_name(file.name.as_str().into());
                app_window.set_student_file_size(file.display_size().into());
            }
            None => {
                app_window.set_student_selected(false);
                app_window.set_student_file_name("".into());
                app_window.set_student_file_size("".into());
            }
        }

        match &state.answer_key_file {
            Some(file) => {
                app_window.set_answer_key_selected(true);
                app_window.set_answer_key_file_name(file.name.as_str().into());
                app_window.set_answer_key_file_size(file.display_size().into());
            }
            None => {
                app_window.set_answer_key_selected(false);
                app_window.set_answer_key_file_name("".into());
                app_window.set_answer_key_file_size("".into());
            }
        }

        app_window.set_is_submitting(state.is_submitting);
        app_window.set_can_submit(state.can_submit());
    }
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let app = AppWindow::new().map_err(|e| anyhow!("UI 初始化失败: {e}"))?;
    let state = Rc::new(RefCell::new(FormState::default()));

    // 创建VM桥接器并绑定UI回调
    let bridge = ViewModelBridge::new(&app, state.clone());
    bridge.initialize_ui(&app);

    tracing::info!("应用启动成功，UI已初始化");
    app.run().map_err(|e| anyhow!("UI 事件循环异常退出: {e}"))?;
    Ok(())
}
