//! Handler dispatch: runs registered handlers in order until one settles the message.

use crate::bot::Bot;
use crate::error::Result;
use crate::types::{Handler, HandlerResponse, Message};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handler dispatch. A handler returning `Stop` or `Reply` ends the run;
/// `Reply(text)` is sent into the chat by the chain itself.
#[derive(Clone)]
pub struct HandlerChain {
    bot: Arc<dyn Bot>,
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            message_type = %message.message_type,
            "step: handler chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Continue => continue,
                HandlerResponse::Stop => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    return Ok(HandlerResponse::Stop);
                }
                HandlerResponse::Reply(text) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        reply_len = text.len(),
                        "step: handler replied"
                    );
                    self.bot.reply_to(message, &text).await?;
                    return Ok(HandlerResponse::Reply(text));
                }
            }
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: handler chain finished without a reply"
        );
        Ok(HandlerResponse::Continue)
    }
}
