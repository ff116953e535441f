use crate::utils::error::Result;

/// 互動流程所依賴的終端介面
///
/// 讀取方法回傳 `Ok(None)` 代表輸入已結束 (EOF)。
pub trait Terminal {
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// 輸出提示文字 (不換行) 並 flush
    fn write_prompt(&mut self, prompt: &str) -> Result<()>;

    /// 讀取下一個以空白分隔的 token，必要時跨行讀取
    fn read_token(&mut self) -> Result<Option<String>>;

    /// 讀取一整行；若目前行尚有未讀內容，先回傳剩餘部分
    fn read_line(&mut self) -> Result<Option<String>>;

    /// 丟棄目前行尚未讀取的內容
    fn discard_pending(&mut self);
}
