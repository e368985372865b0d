mod cmd;
